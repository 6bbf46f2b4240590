mod commitment;
mod pipeline;
mod proofs;
