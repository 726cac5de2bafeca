use time::{OffsetDateTime, macros::datetime};

use crate::MemoForm;

/// A built-in note used to populate an empty store. Timestamps are kept as authored.
#[derive(Debug)]
pub struct SampleMemo {
	pub title: &'static str,
	pub content: &'static str,
	pub category: &'static str,
	pub tags: &'static [&'static str],
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl SampleMemo {
	pub fn form(&self) -> MemoForm {
		MemoForm {
			title: self.title.to_string(),
			content: self.content.to_string(),
			category: self.category.to_string(),
			tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
		}
	}
}

pub const SAMPLE_MEMOS: &[SampleMemo] = &[
	SampleMemo {
		title: "프로젝트 회의 준비",
		content: "다음 주 월요일 오전 10시 프로젝트 킥오프 미팅을 위한 준비사항:\n- 프로젝트 범위 정리\n- 팀원별 역할 분담\n- 일정 계획 수립\n- 필요한 리소스 목록 작성",
		category: "work",
		tags: &["회의", "프로젝트", "준비"],
		created_at: datetime!(2024-01-15 09:00 UTC),
		updated_at: datetime!(2024-01-15 09:00 UTC),
	},
	SampleMemo {
		title: "React 18 새로운 기능 학습",
		content: "React 18에서 새로 추가된 기능들:\n1. Concurrent Features\n2. Automatic Batching\n3. Suspense 개선\n4. useId Hook\n5. useTransition Hook\n\n특히 Concurrent Rendering이 성능에 큰 영향을 줄 것 같다.",
		category: "study",
		tags: &["React", "JavaScript", "프론트엔드"],
		created_at: datetime!(2024-01-14 14:30 UTC),
		updated_at: datetime!(2024-01-14 16:45 UTC),
	},
	SampleMemo {
		title: "새로운 앱 아이디어: 습관 트래커",
		content: "매일 습관을 추적할 수 있는 앱:\n- 습관별 체크리스트\n- 진행 상황 시각화\n- 목표 달성 알림\n- 통계 및 분석 기능\n\n기술 스택: React Native + Supabase",
		category: "idea",
		tags: &["앱개발", "습관", "React Native"],
		created_at: datetime!(2024-01-13 20:15 UTC),
		updated_at: datetime!(2024-01-13 20:15 UTC),
	},
	SampleMemo {
		title: "주말 여행 계획",
		content: "이번 주말 제주도 여행 계획:\n- 토요일: 한라산 등반\n- 일요일: 성산일출봉, 우도 관광\n- 숙소: 제주시내 게스트하우스\n- 준비물: 등산화, 우비, 카메라",
		category: "personal",
		tags: &["여행", "제주도", "주말"],
		created_at: datetime!(2024-01-12 18:00 UTC),
		updated_at: datetime!(2024-01-12 19:30 UTC),
	},
	SampleMemo {
		title: "독서 목록",
		content: "올해 읽고 싶은 책들:\n1. 클린 코드 - 로버트 C. 마틴\n2. 리팩토링 - 마틴 파울러\n3. 실용주의 프로그래머\n4. 데이터 중심 애플리케이션 설계",
		category: "personal",
		tags: &["독서", "개발서적", "자기계발"],
		created_at: datetime!(2024-01-11 10:20 UTC),
		updated_at: datetime!(2024-01-11 10:20 UTC),
	},
	SampleMemo {
		title: "분기별 성과 리뷰 메모",
		content: "Q4 성과 리뷰 주요 포인트:\n- 신규 기능 3건 출시\n- 응답 속도 40% 개선\n- 고객 문의 처리 시간 단축\n\n다음 분기 목표: 테스트 커버리지 80% 달성",
		category: "work",
		tags: &["성과", "리뷰", "분기"],
		created_at: datetime!(2024-01-10 16:00 UTC),
		updated_at: datetime!(2024-01-10 17:10 UTC),
	},
];
