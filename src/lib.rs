pub mod core {
    pub use seqgen;
    pub use sorts;
}
