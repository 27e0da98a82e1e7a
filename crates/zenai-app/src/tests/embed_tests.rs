use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting_slot() -> (EmbedSlot, Rc<Cell<u32>>) {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let slot = EmbedSlot::new(move || counter.set(counter.get() + 1));
    (slot, runs)
}

#[test]
fn processes_after_both_signals_in_either_order() {
    let (mut slot, runs) = counting_slot();
    assert!(!slot.container_mounted());
    assert_eq!(runs.get(), 0);
    assert!(slot.script_loaded());
    assert_eq!(runs.get(), 1);

    let (mut slot, runs) = counting_slot();
    assert!(!slot.script_loaded());
    assert!(slot.container_mounted());
    assert_eq!(runs.get(), 1);
    assert!(slot.is_processed());
}

#[test]
fn processor_runs_only_once() {
    let (mut slot, runs) = counting_slot();
    slot.container_mounted();
    slot.script_loaded();
    assert!(!slot.script_loaded());
    assert!(!slot.container_mounted());
    assert_eq!(runs.get(), 1);
}

#[test]
fn repeated_single_signal_never_processes() {
    let (mut slot, runs) = counting_slot();
    slot.container_mounted();
    slot.container_mounted();
    assert!(!slot.is_processed());
    assert_eq!(runs.get(), 0);
}
