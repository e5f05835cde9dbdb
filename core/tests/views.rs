//! Presentation view tests: placeholders for absent data, closed-variant
//! rendering, and the valuation ladder.

mod common;

use common::{sample_setup, sample_turn};
use tycoon_core::orchestrator::apply_turn;
use tycoon_core::state::{FinancialSnapshot, GameState};
use tycoon_core::view::{self, OfficeTier, Tab, EMPTY_PORTFOLIO, INSUFFICIENT_DATA};

/// A playing-state snapshot assembled the same way the orchestrator does.
fn playing_state() -> GameState {
    let setup = sample_setup();
    let initial = GameState::initial(
        &setup.archetypes[0],
        "Rafael",
        "Garagem Ltda",
        &setup.market_mood,
        Some(setup.rival.clone()),
    );
    apply_turn(&initial, &sample_turn(), None)
}

#[test]
fn corporate_without_history_shows_placeholder() {
    let state = playing_state();
    assert!(state.corporate.history.is_none());
    let rendered = view::corporate(&state);
    assert!(rendered.contains(INSUFFICIENT_DATA), "rendered:\n{rendered}");
}

#[test]
fn corporate_with_history_lists_recent_months() {
    let mut state = playing_state();
    state.corporate.history = Some(
        (1..=6)
            .map(|month| FinancialSnapshot {
                month,
                revenue: 1000.0 * month as f64,
                expenses: 800.0 * month as f64,
                profit: 200.0 * month as f64,
            })
            .collect(),
    );
    let rendered = view::corporate(&state);
    assert!(!rendered.contains(INSUFFICIENT_DATA));
    // Only the last four months make the table.
    assert!(rendered.contains("Mês 6"));
    assert!(rendered.contains("Mês 3"));
    assert!(!rendered.contains("Mês 2"));
}

#[test]
fn office_tier_follows_valuation_ladder() {
    assert_eq!(OfficeTier::from_valuation(0.0), OfficeTier::Garagem);
    assert_eq!(OfficeTier::from_valuation(99_999.0), OfficeTier::Garagem);
    assert_eq!(OfficeTier::from_valuation(100_000.0), OfficeTier::EscritorioComercial);
    assert_eq!(OfficeTier::from_valuation(1_000_000.0), OfficeTier::AndarCorporativo);
    assert_eq!(OfficeTier::from_valuation(10_000_000.0), OfficeTier::SedeGlobal);
    assert!(OfficeTier::SedeGlobal.next_threshold().is_none());
    assert_eq!(OfficeTier::Garagem.next_threshold(), Some(100_000.0));
}

#[test]
fn top_tier_renders_max_level_line() {
    let mut state = playing_state();
    state.corporate.valuation = 25_000_000.0;
    let rendered = view::corporate(&state);
    assert!(rendered.contains("Domínio Global Atingido"));
    assert!(!rendered.contains("Progresso para Expansão"));
}

#[test]
fn empty_portfolio_renders_explicit_message() {
    let mut state = playing_state();
    state.personal.investments.clear();
    let rendered = view::portfolio(&state);
    assert!(rendered.contains(EMPTY_PORTFOLIO), "rendered:\n{rendered}");
}

#[test]
fn portfolio_rows_use_kind_labels() {
    let state = playing_state();
    let rendered = view::portfolio(&state);
    assert!(rendered.contains("Tesouro Selic 2029"));
    assert!(rendered.contains("Renda Fixa"));
}

#[test]
fn stress_bands_match_thresholds() {
    assert_eq!(view::stress_label(20.0), "Saúde Mental Estável");
    assert_eq!(view::stress_label(50.0), "Saúde Mental Estável");
    assert_eq!(view::stress_label(51.0), "Nível de Stress Elevado");
    assert_eq!(view::stress_label(80.0), "Nível de Stress Elevado");
    assert_eq!(view::stress_label(81.0), "PERIGO DE BURNOUT");
}

#[test]
fn news_ticker_absent_without_headlines() {
    let mut state = playing_state();
    assert!(view::news_ticker(&state).is_some());

    state.headlines = Some(Vec::new());
    assert!(view::news_ticker(&state).is_none());

    state.headlines = None;
    assert!(view::news_ticker(&state).is_none());
}

#[test]
fn macro_header_shows_indicators() {
    let state = playing_state();
    let header = view::macro_header(&state);
    assert!(header.contains("Mês #1"));
    assert!(header.contains("Bear Market"));
    assert!(header.contains("0.45%"));
    assert!(header.contains("1.05%"));
}

#[test]
fn overview_lists_options_until_game_over() {
    let state = playing_state();
    let rendered = view::render(&state, Tab::Overview);
    assert!(rendered.contains("[A]"));
    assert!(rendered.contains("AGGRESSIVE"));
    assert!(rendered.contains("Dilema Detectado"));

    let over = apply_turn(&state, &common::terminal_turn(false), None);
    let rendered = view::render(&over, Tab::Overview);
    assert!(!rendered.contains("[A]"));
    assert!(!rendered.contains("Dilema Detectado"));
}

#[test]
fn game_over_banner_distinguishes_victory() {
    let state = playing_state();
    assert!(view::game_over(&state).is_none());

    let defeat = apply_turn(&state, &common::terminal_turn(false), None);
    let banner = view::game_over(&defeat).unwrap();
    assert!(banner.contains("FIM DE JOGO"));
    assert!(banner.contains("sobreviveu por 2 meses"));

    let victory = apply_turn(&state, &common::terminal_turn(true), None);
    let banner = view::game_over(&victory).unwrap();
    assert!(banner.contains("VITÓRIA"));
}
