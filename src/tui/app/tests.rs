use bubbletea_rs::Model;
use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use super::{DashboardApp, DashboardTab};
use crate::analysis::{BrandFilter, SentimentFilter};
use crate::data::test_support::{labelled_review, review};
use crate::data::{Dataset, Sentiment};
use crate::tui::messages::AppMsg;

#[fixture]
fn app() -> DashboardApp {
    let reviews = vec![
        labelled_review("BYD", Sentiment::Positive, Sentiment::Positive, "great range"),
        labelled_review("BYD", Sentiment::Negative, Sentiment::Positive, "poor support"),
        review("EMAS", Sentiment::Neutral, "average price"),
        review("Proton", Sentiment::Positive, "smooth ride"),
        review("EMAS", Sentiment::Negative, "battery degraded"),
    ];
    DashboardApp::new(Dataset::from_reviews(reviews))
}

#[rstest]
fn next_tab_wraps_around(mut app: DashboardApp) {
    for expected in [
        DashboardTab::Distribution,
        DashboardTab::Reviews,
        DashboardTab::Accuracy,
        DashboardTab::TopWords,
        DashboardTab::Counts,
    ] {
        app.handle_message(&AppMsg::NextTab);
        assert_eq!(app.tab, expected);
    }
}

#[rstest]
fn prev_tab_wraps_backwards(mut app: DashboardApp) {
    app.handle_message(&AppMsg::PrevTab);
    assert_eq!(app.tab, DashboardTab::TopWords);
}

#[rstest]
fn select_tab_jumps_directly(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    assert_eq!(app.tab, DashboardTab::Accuracy);
}

#[rstest]
fn filters_are_independent_per_tab(mut app: DashboardApp) {
    app.handle_message(&AppMsg::CycleBrand);
    assert_eq!(
        app.active_filter().brand,
        BrandFilter::Brand("BYD".to_owned())
    );

    app.handle_message(&AppMsg::SelectTab(DashboardTab::Distribution));
    assert_eq!(app.active_filter().brand, BrandFilter::All);

    app.handle_message(&AppMsg::SelectTab(DashboardTab::Counts));
    assert_eq!(
        app.active_filter().brand,
        BrandFilter::Brand("BYD".to_owned())
    );
}

#[rstest]
fn cycle_brand_walks_first_seen_order_then_all(mut app: DashboardApp) {
    let mut seen = Vec::new();
    for _ in 0..4 {
        app.handle_message(&AppMsg::CycleBrand);
        seen.push(app.active_filter().brand.clone());
    }
    assert_eq!(
        seen,
        vec![
            BrandFilter::Brand("BYD".to_owned()),
            BrandFilter::Brand("EMAS".to_owned()),
            BrandFilter::Brand("Proton".to_owned()),
            BrandFilter::All,
        ]
    );
}

#[rstest]
fn cycle_sentiment_is_ignored_on_accuracy_tab(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    app.handle_message(&AppMsg::CycleSentiment);
    assert_eq!(app.active_filter().sentiment, SentimentFilter::All);
}

#[rstest]
fn reset_restores_default_filters(mut app: DashboardApp) {
    app.handle_message(&AppMsg::CycleBrand);
    app.handle_message(&AppMsg::CycleSentiment);
    app.handle_message(&AppMsg::ResetFilters);
    assert_eq!(app.active_filter().brand, BrandFilter::All);
    assert_eq!(app.active_filter().sentiment, SentimentFilter::All);
}

#[rstest]
fn brand_filter_narrows_the_review_set(mut app: DashboardApp) {
    assert_eq!(app.filtered_count(), 5);
    app.handle_message(&AppMsg::CycleBrand);
    assert_eq!(app.filtered_count(), 2);
    assert!(app.filtered_reviews().iter().all(|r| r.brand == "BYD"));
}

#[rstest]
fn limit_adjustment_targets_the_active_tab(mut app: DashboardApp) {
    // Counts has no limit; nothing changes.
    app.handle_message(&AppMsg::IncreaseLimit);
    assert_eq!(app.review_limit.value, 10);
    assert_eq!(app.word_limit.value, 10);

    app.handle_message(&AppMsg::SelectTab(DashboardTab::Reviews));
    app.handle_message(&AppMsg::IncreaseLimit);
    assert_eq!(app.review_limit.value, 15);

    app.handle_message(&AppMsg::SelectTab(DashboardTab::TopWords));
    app.handle_message(&AppMsg::DecreaseLimit);
    assert_eq!(app.word_limit.value, 9);
}

#[rstest]
fn review_limit_saturates_at_bounds(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Reviews));
    for _ in 0..20 {
        app.handle_message(&AppMsg::DecreaseLimit);
    }
    assert_eq!(app.review_limit.value, 5);
    for _ in 0..20 {
        app.handle_message(&AppMsg::IncreaseLimit);
    }
    assert_eq!(app.review_limit.value, 50);
}

#[rstest]
fn cursor_clamps_when_filter_shrinks_the_list(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Reviews));
    app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 4);

    // Narrow to BYD (2 reviews); the cursor must land on the last row.
    app.handle_message(&AppMsg::CycleBrand);
    assert_eq!(app.cursor_position(), 1);
}

#[rstest]
fn navigation_only_applies_to_the_review_tab(mut app: DashboardApp) {
    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::SelectTab(DashboardTab::Reviews));
    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 1);
    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
fn quit_produces_a_command(mut app: DashboardApp) {
    assert!(app.handle_message(&AppMsg::Quit).is_some());
}

#[rstest]
fn any_key_closes_the_help_overlay(mut app: DashboardApp) {
    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.show_help);

    // 'q' would normally quit; while help is open it only closes help.
    let key = KeyMsg {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::empty(),
    };
    let cmd = app.update(Box::new(key));
    assert!(cmd.is_none());
    assert!(!app.show_help);
}

#[rstest]
fn window_resize_flows_through_update(mut app: DashboardApp) {
    let cmd = app.update(Box::new(WindowSizeMsg {
        width: 120,
        height: 40,
    }));
    assert!(cmd.is_none());
    assert!(app.view().contains("Sentiboard"));
}

#[rstest]
fn view_lists_all_tab_titles(app: DashboardApp) {
    let view = app.view();
    for tab in DashboardTab::ALL {
        assert!(view.contains(tab.title()), "missing tab {}", tab.title());
    }
}

#[rstest]
fn counts_view_shows_totals_and_percentages(app: DashboardApp) {
    let view = app.view();
    assert!(view.contains("Total Reviews: 5"));
    assert!(view.contains("positive"));
    assert!(view.contains("%"));
}

#[rstest]
fn accuracy_view_reports_percentage_when_labels_exist(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    let view = app.view();
    assert!(view.contains("Accuracy:"));
    assert!(view.contains("True label:"));
}

#[test]
fn accuracy_view_flags_missing_true_labels() {
    let mut app = DashboardApp::new(Dataset::from_reviews(vec![review(
        "BYD",
        Sentiment::Positive,
        "great range",
    )]));
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    assert!(app.view().contains("True labels not available"));
}

#[test]
fn empty_label_column_keeps_the_accuracy_view_enabled() {
    let dataset = Dataset::from_reviews_with_label_column(
        vec![review("BYD", Sentiment::Positive, "great range")],
        true,
    );
    let mut app = DashboardApp::new(dataset);
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    let view = app.view();
    assert!(view.contains("Accuracy: N/A"));
    assert!(!view.contains("True labels not available"));
}

#[rstest]
fn accuracy_filter_bar_omits_the_sentiment_control(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::Accuracy));
    let view = app.view();
    assert!(view.contains("Brand: All"));
    assert!(!view.contains("Sentiment: All"));
}

#[rstest]
fn top_words_view_shows_word_bars(mut app: DashboardApp) {
    app.handle_message(&AppMsg::SelectTab(DashboardTab::TopWords));
    let view = app.view();
    assert!(view.contains("Top 10 words"));
    assert!(view.contains("range"));
}

#[test]
fn empty_dataset_renders_a_placeholder() {
    let app = DashboardApp::empty();
    assert!(app.view().contains("No reviews match the current filters."));
}

#[rstest]
fn help_overlay_replaces_the_dashboard_view(mut app: DashboardApp) {
    app.handle_message(&AppMsg::ToggleHelp);
    let view = app.view();
    assert!(view.contains("Keyboard Shortcuts"));
    assert!(!view.contains("Total Reviews"));
}
