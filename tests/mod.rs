mod code_analyzer_tests;
mod execution_probe_tests;
mod prompt_tests;
mod vision_tests;
