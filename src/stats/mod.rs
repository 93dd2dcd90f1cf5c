//! Population-genetics statistics for a single locus.
//!
//! - [`heterozygosity`](heterozygosity::heterozygosity): expected heterozygosity `1 - Σ f²`
//! - [`classify_repeat_multiple`](heterozygosity::classify_repeat_multiple): flags loci whose
//!   alleles differ from the wild type by whole repeat units, the signature of
//!   stutter or slippage rather than genuine polymorphism

pub mod heterozygosity;
