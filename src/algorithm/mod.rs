/// Priority-ordered shape classification
pub mod classifier;
/// Grid-wide classification and substitution pass
pub mod mapper;
/// Role-to-tile lookup table
pub mod resolver;
