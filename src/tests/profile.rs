//! Profile construction, growth and rendering.

use serde_json::json;

use crate::{pronouns, Config, NamedSet, PronounInput, Pronouns, Table};

#[test]
fn test_profile_from_subject() {
    let profile = pronouns("she", false);

    let forms = profile.forms();
    assert_eq!(forms.subject, "she");
    assert_eq!(forms.object, "her");
    assert_eq!(forms.determiner, "her");
    assert_eq!(forms.possessive, "hers");
    assert_eq!(forms.reflexive, "herself");
    assert_eq!(forms.sub(), "she");
    assert_eq!(forms.refl(), "herself");

    assert_eq!(profile.to_string(), "she");
    assert_eq!(profile.to_url(), "https://pronoun.is/she");
    assert!(!profile.any());
}

#[test]
fn test_profile_from_several_sets() {
    let profile = pronouns("ze/zir or they", false);
    assert_eq!(profile.len(), 2);
    assert_eq!(profile.forms().subject, "ze");
    assert_eq!(profile.forms().object, "zir");
    assert_eq!(profile.to_string(), "ze/zir or they");
    assert_eq!(profile.to_url(), "https://pronoun.is/ze/zir/:or/they");
}

#[test]
fn test_profile_from_structured_input() {
    let from_forms = pronouns(vec!["xey", "xem", "xeir"], false);
    let from_named = pronouns(NamedSet::new(["xey", "xem", "xeir"]), false);
    let from_json = pronouns(json!({ "pronouns": ["xey", "xem", "xeir"] }), false);

    assert_eq!(from_forms.to_string(), "xey/xem/xeir");
    assert_eq!(from_named.rows(), from_forms.rows());
    assert_eq!(from_json.rows(), from_forms.rows());
    assert_eq!(from_forms.forms().possessive, "xeirs");
}

#[test]
fn test_duplicates_collapse_on_construction() {
    let profile = pronouns("he or HE or he/him", false);
    assert_eq!(profile.len(), 1);
    assert_eq!(profile.to_string(), "he");
}

#[test]
fn test_wildcard_only() {
    let profile = pronouns("any", false);
    assert!(profile.is_empty());
    assert!(profile.any());
    assert_eq!(profile.to_string(), "any");
    assert_eq!(profile.forms().subject, "they");
    assert_eq!(profile.examples().len(), 1);
    assert_eq!(profile.examples().plain[0][0], "They went to the park.");
}

#[test]
fn test_wildcard_is_appended() {
    let profile = pronouns("she or anything", false);
    assert_eq!(profile.to_string(), "she or any");
}

#[test]
fn test_wildcard_is_sticky() {
    let mut profile = pronouns("she or all", false);
    profile.add("he");
    profile.add(vec!["it"]);
    assert!(profile.any());
    assert_eq!(profile.to_string(), "she or he or it or any");

    let mut late = pronouns("she", false);
    assert!(!late.any());
    late.add("*");
    assert!(late.any());
}

#[test]
fn test_unrecognized_input_defaults_to_they() {
    let profile = pronouns(json!(42), true);
    assert_eq!(profile.forms(), pronouns("they", false).forms());
    assert_eq!(profile.to_string(), "they");

    let profile = pronouns(PronounInput::Unrecognized, false);
    assert_eq!(profile.rows(), &[Table::builtin().fallback()]);
}

#[test]
fn test_unresolved_text_yields_empty_selection_with_fallback_forms() {
    let profile = pronouns("blorp", true);
    assert!(profile.is_empty());
    assert_eq!(profile.forms().subject, "they");
    assert_eq!(profile.to_string(), "");
    assert_eq!(profile.to_url(), "https://pronoun.is/");
}

#[test]
fn test_generate_forms_picks_a_set() {
    let mut profile = pronouns("she or he", false);
    profile.generate_forms(1);
    assert_eq!(profile.form_index(), 1);
    assert_eq!(profile.forms().subject, "he");
    assert_eq!(profile.forms().possessive, "his");

    profile.generate_forms(7);
    assert_eq!(profile.forms().subject, "they");
}

#[test]
fn test_add_appends_new_sets_and_keeps_form_index() {
    let mut profile = pronouns("she or he", false);
    profile.generate_forms(1);
    profile.add("fae or she");

    assert_eq!(profile.to_string(), "she or he or fae");
    assert_eq!(profile.form_index(), 1);
    assert_eq!(profile.forms().subject, "he");
    assert_eq!(profile.examples().len(), 3);
    assert_eq!(profile.examples().plain[2][1], "I went with faer.");
}

#[test]
fn test_add_existing_set_is_noop() {
    let mut profile = pronouns("they/them", false);
    profile.add("they");
    assert_eq!(profile.len(), 1);
    assert_eq!(profile.examples().len(), 1);
}

#[test]
fn test_examples_follow_selection() {
    let profile = pronouns("ze/hir or e", false);
    let examples = profile.examples();
    insta::assert_snapshot!(examples.plain.iter().map(|s| s.join(" ")).collect::<Vec<_>>().join("\n"), @r###"
    Ze went to the park. I went with hir. Ze brought hir frisbee. At least I think it was hirs. Ze threw the frisbee to hirself.
    E went to the park. I went with em. E brought eir frisbee. At least I think it was eirs. E threw the frisbee to emself.
    "###);
    assert_eq!(examples.html[1][2], "<strong>E</strong> brought <strong>eir</strong> frisbee.");
    assert_eq!(examples.markdown[0][3], "At least I think it was **hirs**.");
}

#[test]
fn test_custom_table_and_config() {
    let table = Table::from_slugs(vec![
        vec!["they", "them", "their", "theirs", "themselves"],
        vec!["she", "her", "her", "hers", "herself"],
        vec!["she", "shir", "shir", "shirs", "shirself"],
    ])
    .unwrap();
    let profile = Pronouns::new("she", &table, Config::verbose());
    assert!(profile.config().logging);
    assert_eq!(profile.to_string(), "she/her");

    let fallback = Pronouns::new(json!(true), &table, Config::default());
    assert_eq!(fallback.forms().reflexive, "themselves");
}

#[test]
fn test_view_serializes_like_a_profile_object() {
    let profile = pronouns("he or any", false);
    let value = serde_json::to_value(profile.view()).unwrap();

    assert_eq!(value["pronouns"], json!([["he", "him", "his", "his", "himself"]]));
    assert_eq!(value["any"], json!(true));
    assert_eq!(value["subject"], json!("he"));
    assert_eq!(value["ref"], json!("himself"));
    assert_eq!(value["examples"][0][0], json!("He went to the park."));
    assert_eq!(
        value["examples_html"][0][4],
        json!("<strong>He</strong> threw the frisbee to <strong>himself</strong>.")
    );
    assert_eq!(value["examples_md"][0][1], json!("I went with **him**."));
}
