use embedsmith_bot::interactions::ids::{
    edit_modal_id, is_composer_id, parse_edit_modal_id, MODAL_EDIT_PREFIX,
};

#[test]
fn edit_modal_id_round_trips() {
    for index in [0, 1, 9, 24] {
        let id = edit_modal_id(index);
        assert_eq!(parse_edit_modal_id(&id), Some(index));
    }
}

#[test]
fn parse_edit_modal_id_bad() {
    assert!(parse_edit_modal_id(MODAL_EDIT_PREFIX).is_none());
    assert!(parse_edit_modal_id("composer_edit_modal_x").is_none());
    assert!(parse_edit_modal_id("composer_edit_modal_-1").is_none());
    assert!(parse_edit_modal_id("composer_add_modal").is_none());
    assert!(parse_edit_modal_id("").is_none());
}

#[test]
fn composer_family_prefix() {
    assert!(is_composer_id("composer_add_embed"));
    assert!(is_composer_id(&edit_modal_id(3)));
    assert!(!is_composer_id("saga_map"));
    assert!(!is_composer_id(""));
}
