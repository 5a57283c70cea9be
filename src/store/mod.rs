pub mod storage;
pub mod studio;
