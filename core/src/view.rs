//! Presentation views: pure renderers over the current snapshot.
//!
//! No business logic lives here and nothing mutates. Absent optional data
//! renders an explicit placeholder instead of failing.

use crate::format::{format_brl, format_pct};
use crate::state::{GameState, Investment};
use crate::types::Money;
use std::fmt::Write;

pub const INSUFFICIENT_DATA: &str = "Dados insuficientes para gráfico histórico";
pub const EMPTY_PORTFOLIO: &str = "Você ainda não possui investimentos.";

/// Dashboard tab selection. Transient UI state, owned by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Corporate,
    Personal,
    Portfolio,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Visão Geral",
            Self::Corporate => "Corporativo (PJ)",
            Self::Personal => "Pessoal (PF)",
            Self::Portfolio => "Investimentos",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "visao" | "visão" | "geral" | "overview" => Some(Self::Overview),
            "pj" | "corporativo" | "empresa" => Some(Self::Corporate),
            "pf" | "pessoal" => Some(Self::Personal),
            "carteira" | "investimentos" | "portfolio" => Some(Self::Portfolio),
            _ => None,
        }
    }
}

/// Office tier derived from company valuation. Closed ladder, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeTier {
    Garagem,
    EscritorioComercial,
    AndarCorporativo,
    SedeGlobal,
}

impl OfficeTier {
    pub fn from_valuation(valuation: Money) -> Self {
        if valuation < 100_000.0 {
            Self::Garagem
        } else if valuation < 1_000_000.0 {
            Self::EscritorioComercial
        } else if valuation < 10_000_000.0 {
            Self::AndarCorporativo
        } else {
            Self::SedeGlobal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Garagem => "Garagem",
            Self::EscritorioComercial => "Escritório Comercial",
            Self::AndarCorporativo => "Andar Corporativo",
            Self::SedeGlobal => "Sede Global",
        }
    }

    /// Valuation floor of this tier.
    pub fn floor(&self) -> Money {
        match self {
            Self::Garagem => 0.0,
            Self::EscritorioComercial => 100_000.0,
            Self::AndarCorporativo => 1_000_000.0,
            Self::SedeGlobal => 10_000_000.0,
        }
    }

    /// Valuation needed for the next tier. None at the top of the ladder.
    pub fn next_threshold(&self) -> Option<Money> {
        match self {
            Self::Garagem => Some(100_000.0),
            Self::EscritorioComercial => Some(1_000_000.0),
            Self::AndarCorporativo => Some(10_000_000.0),
            Self::SedeGlobal => None,
        }
    }
}

/// Stress band shown next to the mental-health gauge.
pub fn stress_label(stress: f64) -> &'static str {
    if stress > 80.0 {
        "PERIGO DE BURNOUT"
    } else if stress > 50.0 {
        "Nível de Stress Elevado"
    } else {
        "Saúde Mental Estável"
    }
}

/// Render the selected tab for the current snapshot.
pub fn render(state: &GameState, tab: Tab) -> String {
    match tab {
        Tab::Overview => overview(state),
        Tab::Corporate => corporate(state),
        Tab::Personal => personal(state),
        Tab::Portfolio => portfolio(state),
    }
}

/// Always-visible macro indicators line.
pub fn macro_header(state: &GameState) -> String {
    format!(
        "Mês #{turn}  |  Humor de Mercado: {mood}  |  Inflação: {inflation}  |  Juros (Selic): {interest}",
        turn = state.turn,
        mood = state.market_mood,
        inflation = format_pct(state.inflation_rate),
        interest = format_pct(state.interest_rate),
    )
}

/// Breaking-news ticker. None when the turn carried no headlines.
pub fn news_ticker(state: &GameState) -> Option<String> {
    let headlines = state.headlines.as_ref()?;
    if headlines.is_empty() {
        return None;
    }
    Some(format!("BREAKING NEWS: {}", headlines.join("  //  ")))
}

pub fn overview(state: &GameState) -> String {
    let mut out = String::new();

    let net_profit = state.corporate.revenue - state.corporate.expenses;
    writeln!(out, "== VISÃO GERAL ==").unwrap();
    writeln!(
        out,
        "Caixa Corporativo: {}  (Lucro Líquido: {})",
        format_brl(state.corporate.cash),
        format_brl(net_profit),
    )
    .unwrap();
    writeln!(
        out,
        "Patrimônio Pessoal: {}  (Stress: {:.0}%  Renda Passiva: {})",
        format_brl(state.personal.net_worth),
        state.personal.stress,
        format_brl(state.personal.passive_income),
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "-- Narrativa Mensal --").unwrap();
    match state.latest_narrative() {
        Some(entry) => writeln!(out, "{}", entry.text).unwrap(),
        None => writeln!(out, "(ainda sem narrativa)").unwrap(),
    }

    if let Some(event) = &state.current_event {
        if !state.is_game_over {
            writeln!(out).unwrap();
            writeln!(out, "-- Dilema Detectado --").unwrap();
            writeln!(out, "{event}").unwrap();
        }
    }

    if !state.is_game_over && !state.current_options.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "-- Decisões Estratégicas --").unwrap();
        writeln!(
            out,
            "Excedente pessoal disponível: {}",
            format_brl(state.personal.surplus),
        )
        .unwrap();
        for option in &state.current_options {
            writeln!(
                out,
                "[{id}] {badge:<12} {label}\n    {description}",
                id = option.id,
                badge = option.kind.label(),
                label = option.label,
                description = option.description,
            )
            .unwrap();
        }
    }

    out
}

pub fn corporate(state: &GameState) -> String {
    let corporate = &state.corporate;
    let tier = OfficeTier::from_valuation(corporate.valuation);
    let mut out = String::new();

    writeln!(out, "== ADMINISTRAÇÃO CORPORATIVA - {} ==", state.company_name).unwrap();
    writeln!(out, "Instalações Atuais: {}", tier.label()).unwrap();
    match tier.next_threshold() {
        Some(target) => {
            let floor = tier.floor();
            let progress = ((corporate.valuation - floor) / (target - floor) * 100.0)
                .clamp(0.0, 100.0);
            writeln!(
                out,
                "Progresso para Expansão: {progress:.0}%  (Atual: {current}  Meta: {goal})",
                current = format_brl(corporate.valuation),
                goal = format_brl(target),
            )
            .unwrap();
        }
        None => writeln!(out, "Domínio Global Atingido (Nível Máximo)").unwrap(),
    }

    writeln!(out).unwrap();
    writeln!(out, "-- Evolução do Fluxo de Caixa (Últimos Meses) --").unwrap();
    match corporate.history.as_deref().filter(|h| !h.is_empty()) {
        Some(history) => {
            writeln!(out, "{:<8}{:>16}{:>16}{:>16}", "Mês", "Receita", "Despesas", "Lucro").unwrap();
            for snapshot in history.iter().rev().take(4).rev() {
                writeln!(
                    out,
                    "{:<8}{:>16}{:>16}{:>16}",
                    format!("Mês {}", snapshot.month),
                    format_brl(snapshot.revenue),
                    format_brl(snapshot.expenses),
                    format_brl(snapshot.profit),
                )
                .unwrap();
            }
        }
        None => writeln!(out, "{INSUFFICIENT_DATA}").unwrap(),
    }

    writeln!(out).unwrap();
    writeln!(out, "-- Balanço & Métricas --").unwrap();
    writeln!(out, "Caixa em Mãos (Atual): {}", format_brl(corporate.cash)).unwrap();
    writeln!(out, "Valuation da Empresa:  {}", format_brl(corporate.valuation)).unwrap();
    writeln!(out, "Serviço da Dívida:     {}", format_brl(corporate.debt_service)).unwrap();
    writeln!(out, "Status da Empresa:     {}", corporate.health.label()).unwrap();

    out
}

pub fn personal(state: &GameState) -> String {
    let personal = &state.personal;
    let mut out = String::new();

    writeln!(out, "== FINANÇAS PESSOAIS - {} ==", state.player_name).unwrap();
    writeln!(out, "-- Orçamento Doméstico --").unwrap();
    writeln!(
        out,
        "Salário / Pró-Labore (Estimado): {}",
        format_brl(personal.cash - personal.surplus),
    )
    .unwrap();
    writeln!(out, "Renda Passiva:     {}", format_brl(personal.passive_income)).unwrap();
    writeln!(out, "Custo de Vida:    -{}", format_brl(personal.lifestyle_cost)).unwrap();
    writeln!(out, "Excedente Mensal:  {}", format_brl(personal.surplus)).unwrap();

    writeln!(out).unwrap();
    writeln!(out, "-- Saúde Mental --").unwrap();
    writeln!(out, "Stress: {:.0}/100  {}", personal.stress, stress_label(personal.stress)).unwrap();

    writeln!(out).unwrap();
    writeln!(out, "-- Patrimônio Líquido --").unwrap();
    writeln!(out, "{}", format_brl(personal.net_worth)).unwrap();

    out
}

pub fn portfolio(state: &GameState) -> String {
    let mut out = String::new();
    writeln!(out, "== PORTFÓLIO DE INVESTIMENTOS ==").unwrap();

    if state.personal.investments.is_empty() {
        writeln!(out, "{EMPTY_PORTFOLIO}").unwrap();
        return out;
    }

    writeln!(
        out,
        "{:<28}{:<12}{:>16}{:>18}{:>16}",
        "Ativo", "Tipo", "Valor Total", "Retorno Mensal", "Rentabilidade",
    )
    .unwrap();
    for investment in &state.personal.investments {
        writeln!(out, "{}", portfolio_row(investment)).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Total em carteira: {}", format_brl(state.personal.portfolio)).unwrap();
    out
}

fn portfolio_row(investment: &Investment) -> String {
    let sign = if investment.monthly_yield >= 0.0 { "+" } else { "" };
    format!(
        "{:<28}{:<12}{:>16}{:>18}{:>16}",
        investment.name,
        investment.kind.label(),
        format_brl(investment.amount),
        format!("{sign}{}", format_brl(investment.monthly_yield)),
        format_pct(investment.yield_rate),
    )
}

/// Terminal banner once the session has ended. None while still playing.
pub fn game_over(state: &GameState) -> Option<String> {
    if !state.is_game_over {
        return None;
    }
    let mut out = String::new();
    if state.is_victory == Some(true) {
        writeln!(out, "=== VITÓRIA ===").unwrap();
    } else {
        writeln!(out, "=== FIM DE JOGO ===").unwrap();
    }
    if let Some(reason) = &state.game_over_reason {
        writeln!(out, "{reason}").unwrap();
    }
    writeln!(out, "Você sobreviveu por {} meses.", state.turn).unwrap();
    Some(out)
}
