/// CSV run file: saving accepted steps and resuming from the last saved one
pub mod run_store;
