pub mod comment_service;
pub mod dto;
