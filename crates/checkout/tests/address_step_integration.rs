//! Integration tests for the address step against a shared order store.

use checkout::{
    AddressField, AddressStep, OrderAction, OrderDispatch, OrderStore, RawAddressInput, WizardStep,
};
use common::CheckoutId;

const ADDRESS_STEP: i64 = 1;

fn setup() -> (AddressStep<OrderStore>, OrderStore, WizardStep) {
    let store = OrderStore::new(CheckoutId::new());
    let wizard = WizardStep::starting_at(ADDRESS_STEP);
    let step = AddressStep::new(ADDRESS_STEP, store.clone(), wizard.clone());
    (step, store, wizard)
}

fn valid_input() -> RawAddressInput {
    RawAddressInput::new()
        .with(AddressField::Address1, "Av. Corrientes 1234")
        .with(AddressField::Address2, "")
        .with(AddressField::City, "Buenos Aires")
        .with(AddressField::State, "CABA")
        .with(AddressField::ZipCode, "C1043")
}

#[test]
fn test_valid_input_dispatches_once_and_advances() {
    let (mut step, store, wizard) = setup();

    let address = step.validate_and_advance(&valid_input()).unwrap();

    assert_eq!(wizard.current(), ADDRESS_STEP + 1);
    assert_eq!(store.actions(), vec![OrderAction::SetAddress(address.clone())]);
    assert_eq!(address.address1, "Av. Corrientes 1234");
    assert_eq!(address.address2, "");
    assert_eq!(address.city, "Buenos Aires");
    assert_eq!(address.state, "CABA");
    assert_eq!(address.zip_code, "C1043");
    assert_eq!(store.snapshot().address(), Some(&address));
}

#[test]
fn test_address2_is_copied_verbatim() {
    let (mut step, store, _wizard) = setup();
    let input = valid_input().with(AddressField::Address2, "Piso 3, Dto B");

    step.validate_and_advance(&input).unwrap();

    assert_eq!(store.snapshot().address().unwrap().address2, "Piso 3, Dto B");
}

#[test]
fn test_each_empty_field_reports_required_without_length_error() {
    for field in [
        AddressField::Address1,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
    ] {
        let (mut step, store, wizard) = setup();
        let input = valid_input().with(field, "");

        let errors = step.validate_and_advance(&input).unwrap_err();

        assert_eq!(errors.len(), 1, "field {field}");
        assert!(errors.get(field).unwrap().is_required(), "field {field}");
        assert_eq!(store.dispatch_count(), 0);
        assert_eq!(wizard.current(), ADDRESS_STEP);
    }
}

#[test]
fn test_each_short_field_reports_min_length_without_required_error() {
    for field in [
        AddressField::Address1,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
    ] {
        for value in ["x", "xy"] {
            let (mut step, store, wizard) = setup();
            let input = valid_input().with(field, value);

            let errors = step.validate_and_advance(&input).unwrap_err();

            assert!(errors.get(field).unwrap().is_too_short(), "field {field}");
            assert_eq!(store.dispatch_count(), 0);
            assert_eq!(wizard.current(), ADDRESS_STEP);
        }
    }
}

#[test]
fn test_missing_fields_count_as_empty() {
    let (mut step, _store, _wizard) = setup();

    let errors = step.validate_and_advance(&RawAddressInput::new()).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|(_, err)| err.is_required()));
    assert!(errors.get(AddressField::Address2).is_none());
}

#[test]
fn test_go_back_always_retreats_without_dispatch() {
    let (mut step, store, wizard) = setup();
    step.edit(AddressField::City, "x");

    assert_eq!(step.go_back(), ADDRESS_STEP - 1);
    assert_eq!(step.go_back(), ADDRESS_STEP - 2);

    assert_eq!(wizard.current(), ADDRESS_STEP - 2);
    assert_eq!(store.dispatch_count(), 0);
}

#[test]
fn test_go_back_after_success_returns_to_step() {
    let (mut step, store, wizard) = setup();

    step.validate_and_advance(&valid_input()).unwrap();
    step.go_back();

    assert_eq!(wizard.current(), ADDRESS_STEP);
    assert_eq!(store.dispatch_count(), 1);
}

#[test]
fn test_repeated_submit_is_not_deduplicated() {
    let (mut step, store, wizard) = setup();
    let input = valid_input();

    let first = step.validate_and_advance(&input).unwrap();
    let second = step.validate_and_advance(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.dispatch_count(), 2);
    assert_eq!(wizard.current(), ADDRESS_STEP + 2);
}

#[test]
fn test_outcomes_are_counted() {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let (mut step, _store, _wizard) = setup();

    metrics::with_local_recorder(&recorder, || {
        step.validate_and_advance(&valid_input()).unwrap();
        step.validate_and_advance(&RawAddressInput::new()).unwrap_err();
        step.validate_and_advance(&RawAddressInput::new()).unwrap_err();
        step.go_back();
    });

    let rendered = handle.render();
    assert!(rendered.contains(r#"checkout_address_submissions_total{outcome="accepted"} 1"#));
    assert!(rendered.contains(r#"checkout_address_submissions_total{outcome="rejected"} 2"#));
    assert!(rendered.contains("checkout_step_back_total 1"));
}

#[test]
fn test_custom_dispatch_receives_set_address() {
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<OrderAction>>);

    impl OrderDispatch for &Recorder {
        fn dispatch(&self, action: OrderAction) {
            self.0.borrow_mut().push(action);
        }
    }

    let recorder = Recorder::default();
    let wizard = WizardStep::new();
    let mut step = AddressStep::new(0, &recorder, wizard.clone());

    step.validate_and_advance(&valid_input()).unwrap();

    let actions = recorder.0.borrow();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type(), "SET_ADDRESS");
    assert_eq!(wizard.current(), 1);
}
