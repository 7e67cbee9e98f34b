mod additional_imports_tests;
mod hook_generator_tests;
mod module_assembler_tests;
