pub use self::prover::{Prover, ProverRankList};

mod prover;
