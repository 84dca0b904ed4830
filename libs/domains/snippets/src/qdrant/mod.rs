mod client;
mod config;

pub use client::QdrantSnippetRepository;
pub use config::QdrantConfig;
