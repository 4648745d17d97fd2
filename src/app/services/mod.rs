pub mod amendment;
pub mod bill;
pub mod congress;
pub mod hearing;
pub mod law;
pub mod member;
pub mod summary;
pub mod treaty;

pub use amendment::AmendmentService;
pub use bill::BillService;
pub use congress::CongressService;
pub use hearing::HearingService;
pub use law::LawService;
pub use member::MemberService;
pub use summary::SummaryService;
pub use treaty::TreatyService;
