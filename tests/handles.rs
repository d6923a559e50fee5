//! Tests for handle derivation: static kind sets, content-derived sets,
//! determinism, and the template clamp.
mod common;
use common::*;
use flowstate::handles::{HandleDirection, HandleSide, derive_handles, extract_placeholders};
use flowstate::prelude::*;

fn handle_ids(n: &Node) -> Vec<String> {
    derive_handles(n).into_iter().map(|h| h.id).collect()
}

#[test]
fn test_static_kind_handle_sets() {
    assert_eq!(handle_ids(&node("n", "customInput")), ["value"]);
    assert_eq!(handle_ids(&node("n", "customOutput")), ["value"]);
    assert_eq!(handle_ids(&node("n", "filter")), ["input", "output"]);
    assert_eq!(handle_ids(&node("n", "visualization")), ["input", "output"]);
    assert_eq!(handle_ids(&node("n", "math")), ["input", "output"]);
    assert_eq!(handle_ids(&node("n", "webScraper")), ["input", "output"]);
    assert_eq!(handle_ids(&node("n", "dataSource")), ["config", "response"]);
}

#[test]
fn test_condition_exposes_two_named_outputs() {
    let handles = derive_handles(&node("n", "condition"));
    assert_eq!(handles.len(), 3);
    assert_eq!(handles[0].id, "input");
    assert_eq!(handles[0].direction, HandleDirection::Target);
    assert_eq!(handles[1].id, "true");
    assert_eq!(handles[1].top_percent, Some(33));
    assert_eq!(handles[2].id, "false");
    assert_eq!(handles[2].top_percent, Some(66));
    assert_eq!(handles[2].direction, HandleDirection::Source);
}

#[test]
fn test_llm_exposes_system_prompt_response() {
    let handles = derive_handles(&node("n", "llm"));
    assert_eq!(
        handles.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
        ["system", "prompt", "response"]
    );
    assert_eq!(handles[0].side, HandleSide::Left);
    assert_eq!(handles[2].side, HandleSide::Right);
    assert_eq!(handles[2].direction, HandleDirection::Source);
}

#[test]
fn test_group_and_unknown_kinds_expose_nothing() {
    assert!(derive_handles(&node("n", "group")).is_empty());
    assert!(derive_handles(&node("n", "somethingElse")).is_empty());
}

#[test]
fn test_text_placeholders_become_input_handles() {
    let n = text_node("n", "Dear {{name}}, your {{order}} has shipped.");
    assert_eq!(handle_ids(&n), ["name", "order", "output"]);

    let handles = derive_handles(&n);
    assert_eq!(handles[0].direction, HandleDirection::Target);
    assert_eq!(handles[2].direction, HandleDirection::Source);
}

#[test]
fn test_text_placeholders_deduplicated_in_first_appearance_order() {
    let n = text_node("n", "{{a}} and {{b}} and {{a}}");
    assert_eq!(handle_ids(&n), ["a", "b", "output"]);
}

#[test]
fn test_text_derivation_is_deterministic() {
    let n = text_node("n", "{{x}} {{y}} {{x}} {{z}}");
    assert_eq!(derive_handles(&n), derive_handles(&n));
}

#[test]
fn test_text_placeholder_lexical_rules() {
    // Identifiers must not start with a digit; surrounding whitespace is
    // tolerated; malformed tokens are skipped.
    assert_eq!(
        extract_placeholders("{{ok}} {{1bad}} {{ also_ok }} {{bad name}} {{_lead}}"),
        ["ok", "also_ok", "_lead"]
    );
    assert!(extract_placeholders("no placeholders here").is_empty());
    assert!(extract_placeholders("{single} {{}} {{{unclosed}").is_empty());
}

#[test]
fn test_text_without_content_exposes_only_output() {
    assert_eq!(handle_ids(&node("n", "text")), ["output"]);
    // Non-string content behaves as empty text.
    let n = node("n", "text").with_field("text", serde_json::json!(42));
    assert_eq!(handle_ids(&n), ["output"]);
}

#[test]
fn test_template_handles_named_and_positioned() {
    let n = template_node("n", 3);
    let handles = derive_handles(&n);
    assert_eq!(
        handles.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
        ["var1", "var2", "var3", "output"]
    );
    // Evenly spread: i / (n + 1), rounded.
    assert_eq!(handles[0].top_percent, Some(25));
    assert_eq!(handles[1].top_percent, Some(50));
    assert_eq!(handles[2].top_percent, Some(75));
    assert_eq!(handles[3].top_percent, None);
}

#[test]
fn test_template_count_is_clamped() {
    assert_eq!(input_handle_ids(&template_node("n", 1)), ["var1", "var2"]);
    let wide = input_handle_ids(&template_node("n", 15));
    assert_eq!(wide.len(), 10);
    assert_eq!(wide.last().map(String::as_str), Some("var10"));
}

#[test]
fn test_template_defaults_to_three_inputs() {
    assert_eq!(
        input_handle_ids(&node("n", "template")),
        ["var1", "var2", "var3"]
    );
}

#[test]
fn test_rederivation_keeps_unchanged_placeholder_ids_stable() {
    let before = text_node("n", "{{keep}} {{gone}}");
    let after = text_node("n", "{{added}} {{keep}}");
    let keep_before = derive_handles(&before)
        .into_iter()
        .find(|h| h.id == "keep")
        .expect("present before edit");
    let keep_after = derive_handles(&after)
        .into_iter()
        .find(|h| h.id == "keep")
        .expect("present after edit");
    assert_eq!(keep_before, keep_after);
}
