//! Process environment adapter tests

use ilp_module_domain::Environment;
use ilp_module_infrastructure::ProcessEnvironment;

#[test]
fn test_reads_working_directory() {
    assert_eq!(
        ProcessEnvironment.current_dir(),
        std::env::current_dir().ok()
    );
}

#[test]
fn test_missing_variable_is_none() {
    assert_eq!(
        ProcessEnvironment.var("ILP_MODULE_TEST_SURELY_UNSET_VARIABLE"),
        None
    );
}
