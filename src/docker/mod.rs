pub mod client;

pub use client::DockerClient;
