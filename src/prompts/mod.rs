pub mod system_analysis_prompt;
