use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("molaris.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("molaris.client.request_errors");

pub(crate) static STORE_LOADS: Counter = Counter::new("molaris.store.loads");
pub(crate) static STORE_LOAD_DISCARDS: Counter = Counter::new("molaris.store.load_discards");
pub(crate) static STORE_SAVES: Counter = Counter::new("molaris.store.saves");
pub(crate) static STORE_SAVE_ERRORS: Counter = Counter::new("molaris.store.save_errors");

pub(crate) static SUBMISSIONS: Counter = Counter::new("molaris.controller.submissions");
pub(crate) static SUBMISSIONS_REJECTED: Counter =
    Counter::new("molaris.controller.submissions_rejected");
pub(crate) static SUBMISSION_FAILURES: Counter =
    Counter::new("molaris.controller.submission_failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&STORE_LOADS);
    collector.register_counter(&STORE_LOAD_DISCARDS);
    collector.register_counter(&STORE_SAVES);
    collector.register_counter(&STORE_SAVE_ERRORS);

    collector.register_counter(&SUBMISSIONS);
    collector.register_counter(&SUBMISSIONS_REJECTED);
    collector.register_counter(&SUBMISSION_FAILURES);
}
