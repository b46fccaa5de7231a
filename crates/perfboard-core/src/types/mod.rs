//! 대시보드 전반에서 사용되는 공통 타입.

mod date_key;
mod decimal;

pub use date_key::*;
pub use decimal::*;
