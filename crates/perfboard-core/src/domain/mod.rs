//! 성과 대시보드를 위한 도메인 모델.

mod aligned;
mod policy;
mod records;

pub use aligned::*;
pub use policy::*;
pub use records::*;
