//! 데이터 액세스 계층
//!
//! 엔티티별 저장소 추상화와 MongoDB 구현을 제공합니다.
//! 유스케이스는 저장소를 합성으로 보유하며(상속 없음), 사용자 저장소는
//! 테스트 교체가 가능하도록 trait 뒤에 둡니다.

pub mod content;
pub mod users;
