pub mod ai_providers;
pub mod code_analyzer;
pub mod heuristic_analyzer;
pub mod response_normalizer;
