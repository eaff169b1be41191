pub(crate) mod importance;
pub(crate) mod project;
pub(crate) mod rank_service;
pub(crate) mod ranking;
pub(crate) mod scoring;
pub(crate) mod university;

pub use rank_service::RankService;
