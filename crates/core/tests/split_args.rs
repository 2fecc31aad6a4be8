use ripper_core::analysis::{extract_args, split_cpp_args};

#[test]
fn splits_only_at_top_level_commas() {
    assert_eq!(
        split_cpp_args("std::map<int, std::string>, float"),
        vec!["std::map<int, std::string>", "float"]
    );
}

#[test]
fn single_argument_comes_back_trimmed() {
    assert_eq!(split_cpp_args("  unsigned int "), vec!["unsigned int"]);
}

#[test]
fn already_split_input_is_unchanged() {
    assert_eq!(split_cpp_args("cococs2d::CCPoint const&"), vec!["cococs2d::CCPoint const&"]);
}

#[test]
fn empty_input_yields_no_arguments() {
    assert!(split_cpp_args("").is_empty());
}

#[test]
fn deep_template_nesting_stays_in_one_piece() {
    let arg = "std::vector<std::pair<int, std::map<char, bool>>>";
    assert_eq!(split_cpp_args(&format!("{arg}, long")), vec![arg, "long"]);
}

#[test]
fn extract_args_takes_text_between_outer_parens() {
    assert_eq!(extract_args("cococs2d::CCNode::boundingBox(float, int)"), vec!["float", "int"]);
}

#[test]
fn extract_args_handles_nullary_signatures() {
    assert!(extract_args("cococs2d::CCNode::onEnter()").is_empty());
}

#[test]
fn extract_args_without_parens_yields_nothing() {
    assert!(extract_args("guard variable for something").is_empty());
}

#[test]
fn extract_args_strips_brace_wrapper_and_its_leader() {
    // Brace forms carry a descriptor before the first comma; only the
    // signature after it contributes arguments.
    assert_eq!(
        extract_args("{virtual override thunk(-8, cococs2d::CCNode::visit(float, int))}"),
        vec!["float", "int"]
    );
}
