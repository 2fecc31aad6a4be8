use ripper_core::analysis::{arg_offsets, is_this_call, SlotCounter};
use ripper_core::model::Namespace;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| a.to_string()).collect()
}

#[test]
fn slot_counter_exhausts_registers_before_stack() {
    let mut counter = SlotCounter::default();
    let slots: Vec<String> = (0..7).map(|_| counter.next_slot()).collect();
    assert_eq!(slots, vec!["r0", "r1", "r2", "r3", "STACK[0x0]", "STACK[0x4]", "STACK[0x8]"]);
}

#[test]
fn stack_offsets_render_as_lowercase_hex() {
    let mut counter = SlotCounter::default();
    let slots: Vec<String> = (0..12).map(|_| counter.next_slot()).collect();
    assert_eq!(slots.last().map(String::as_str), Some("STACK[0x1c]"));
}

#[test]
fn six_arguments_without_receiver_spill_two_to_stack() {
    let offsets = arg_offsets(&args(&["int", "int", "int", "int", "float", "bool"]), false);
    let slots: Vec<&String> = offsets.keys().collect();
    assert_eq!(slots, vec!["r0", "r1", "r2", "r3", "STACK[0x0]", "STACK[0x4]"]);
    assert_eq!(offsets["STACK[0x0]"], "float");
    assert_eq!(offsets["STACK[0x4]"], "bool");
}

#[test]
fn member_call_binds_this_to_the_first_slot() {
    let offsets = arg_offsets(&args(&["int"]), true);
    assert_eq!(offsets.get_index(0), Some((&"r0".to_string(), &"this".to_string())));
    assert_eq!(offsets.get_index(1), Some((&"r1".to_string(), &"int".to_string())));
}

#[test]
fn member_call_with_no_arguments_still_gets_a_receiver_slot() {
    let offsets = arg_offsets(&[], true);
    assert_eq!(offsets.len(), 1);
    assert_eq!(offsets["r0"], "this");
}

#[test]
fn receiver_shifts_every_argument_one_slot() {
    let offsets = arg_offsets(&args(&["int", "int", "int", "int"]), true);
    let slots: Vec<&String> = offsets.keys().collect();
    assert_eq!(slots, vec!["r0", "r1", "r2", "r3", "STACK[0x0]"]);
    assert_eq!(offsets["STACK[0x0]"], "int");
}

#[test]
fn descriptors_are_trimmed() {
    let offsets = arg_offsets(&args(&["  float "]), false);
    assert_eq!(offsets["r0"], "float");
}

#[test]
fn recognized_namespace_implies_this_call() {
    assert!(is_this_call("std::terminate()", Namespace::Std));
}

#[test]
fn two_scope_components_imply_this_call() {
    assert!(is_this_call("SomeClass::method(int)", Namespace::None));
}

#[test]
fn qualified_argument_type_triggers_the_heuristic() {
    // Known false positive for free functions, preserved on purpose.
    assert!(is_this_call("dump(std::string)", Namespace::None));
}

#[test]
fn plain_free_function_is_not_a_this_call() {
    assert!(!is_this_call("atoi(char const*)", Namespace::None));
}
