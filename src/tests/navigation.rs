use super::{first_visible, hit_test, sidebar_items, strip_items, NavVariant};
use crate::section::{SectionId, SECTIONS};
use ratatui::layout::Rect;

#[test]
fn test_variant_breakpoint() {
    assert_eq!(NavVariant::for_width(120, 100), NavVariant::Sidebar);
    assert_eq!(NavVariant::for_width(100, 100), NavVariant::Sidebar);
    assert_eq!(NavVariant::for_width(99, 100), NavVariant::Strip);
}

#[test]
fn test_sidebar_lists_every_section() {
    let items = sidebar_items(Rect::new(0, 0, 30, 20), SectionId::Security);

    assert_eq!(items.len(), SECTIONS.len());
    assert_eq!(items[0].area, Rect::new(1, 1, 28, 1));
    assert_eq!(hit_test(&items, 5, 3), Some(SectionId::Configuration));
    assert_eq!(hit_test(&items, 0, 3), None, "Border is not clickable");
}

#[test]
fn test_short_sidebar_starts_at_top_for_early_sections() {
    let items = sidebar_items(Rect::new(0, 0, 30, 5), SectionId::Installation);

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, SectionId::GettingStarted);
}

#[test]
fn test_short_sidebar_scrolls_to_active_section() {
    let area = Rect::new(0, 0, 30, 9);
    let items = sidebar_items(area, SectionId::Troubleshooting);

    assert_eq!(items.len(), 7);
    assert_eq!(items[0].id, SectionId::Configuration);
    let last = items.last().unwrap();
    assert_eq!(last.id, SectionId::Troubleshooting);
    assert_eq!(last.area.y, 7);
    assert_eq!(
        hit_test(&items, 5, last.area.y),
        Some(SectionId::Troubleshooting)
    );
}

#[test]
fn test_sidebar_without_room_is_empty() {
    assert!(sidebar_items(Rect::new(0, 0, 30, 2), SectionId::Security).is_empty());
}

#[test]
fn test_strip_starts_at_first_section_when_it_fits() {
    let items = strip_items(Rect::new(0, 0, 400, 3), SectionId::Installation);

    assert_eq!(items.len(), SECTIONS.len());
    assert_eq!(items[0].id, SectionId::GettingStarted);
    assert!(items.windows(2).all(|w| w[0].area.right() < w[1].area.x));
}

#[test]
fn test_strip_scrolls_to_active_section() {
    let area = Rect::new(0, 0, 40, 3);
    let items = strip_items(area, SectionId::Troubleshooting);

    assert_ne!(items[0].id, SectionId::GettingStarted);
    let last = items.last().unwrap();
    assert_eq!(last.id, SectionId::Troubleshooting);
    assert!(last.area.right() <= area.right() - 1);
    assert_eq!(
        hit_test(&items, last.area.x, 1),
        Some(SectionId::Troubleshooting)
    );
}

#[test]
fn test_first_visible() {
    assert_eq!(first_visible(&[5, 5, 5], 2, 100, 1), 0);
    assert_eq!(first_visible(&[5, 5, 5], 2, 11, 1), 1);
    assert_eq!(first_visible(&[5, 5, 5], 2, 3, 1), 2);
    assert_eq!(first_visible(&[5, 5, 5], 0, 3, 1), 0);
}

#[test]
fn test_first_visible_without_gaps() {
    assert_eq!(first_visible(&[1; 9], 8, 7, 0), 2);
    assert_eq!(first_visible(&[1; 9], 8, 9, 0), 0);
    assert_eq!(first_visible(&[1; 9], 3, 7, 0), 0);
}
