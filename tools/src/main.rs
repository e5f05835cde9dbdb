//! game-runner: interactive terminal runner for Tycoon.
//!
//! Usage:
//!   GEMINI_API_KEY=... game-runner
//!   GEMINI_API_KEY=... game-runner --config tycoon.json
//!
//! One session per process. Setup failures are fatal (restart the
//! terminal); turn failures keep the current state and invite a retry.

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tycoon_core::{
    config::GameConfig,
    error::GameError,
    gemini::GeminiGenerator,
    orchestrator::TurnOrchestrator,
    state::{Decision, OptionId, SURPLUS_PRESETS},
    view::{self, Tab},
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].clone());

    let started_at = chrono::Local::now();
    println!("TYCOON - Mestre do Jogo Financeiro // Modo Hardcore");
    println!("  sessão iniciada: {}", started_at.format("%Y-%m-%d %H:%M:%S"));
    println!();

    let config = match GameConfig::load(config_path.as_deref().map(Path::new)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Falha de configuração: {e}");
            std::process::exit(1);
        }
    };
    log::info!("model={} base_url={}", config.model, config.base_url);

    let generator = GeminiGenerator::new(config)?;
    let mut orchestrator = TurnOrchestrator::new(generator);

    println!("Inicializando Simulação Financeira...");
    if let Err(e) = orchestrator.fetch_setup() {
        log::error!("setup failed: {e}");
        eprintln!();
        eprintln!("Falha ao conectar ao Mestre do Jogo (Gemini). Verifique sua chave de API.");
        eprintln!("  causa: {e}");
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // Setup: intro, archetype selection, identity.
    {
        let setup = orchestrator.setup().expect("setup fetched above");
        println!();
        println!("\"{}\"", setup.intro);
        println!();
        println!("Humor do Mercado: {}", setup.market_mood);
        println!();
        println!(
            "RIVAL: {} ({}) - {}",
            setup.rival.name, setup.rival.company_name, setup.rival.description
        );
        println!();
        for (i, arch) in setup.archetypes.iter().enumerate() {
            println!("[{}] {}", i + 1, arch.name);
            println!("    {}", arch.description);
            println!(
                "    Capital: {}  |  Ativo: {}  |  Defeito: {}",
                tycoon_core::format::format_brl(arch.starting_capital),
                arch.unique_asset,
                arch.critical_flaw,
            );
        }
        println!();
    }

    let archetype_id = loop {
        let line = prompt_line(&mut input, "Escolha seu arquétipo (número): ")?;
        let setup = orchestrator.setup().expect("setup fetched above");
        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= setup.archetypes.len() => {
                break setup.archetypes[n - 1].id.clone();
            }
            _ => println!("Opção inválida."),
        }
    };
    let player_name = prompt_nonempty(&mut input, "Nome do Empreendedor: ")?;
    let company_name = prompt_nonempty(&mut input, "Nome da Empresa: ")?;

    println!();
    println!("INICIAR SIMULAÇÃO...");
    if let Err(e) = orchestrator.initialize(&archetype_id, &player_name, &company_name) {
        log::error!("initialize failed: {e}");
        eprintln!();
        eprintln!("Falha ao inicializar o mundo do jogo.");
        eprintln!("  causa: {e}");
        std::process::exit(1);
    }

    // Main loop: render, read a command, act.
    let mut tab = Tab::Overview;
    let mut surplus_allocation = SURPLUS_PRESETS[0].to_string();

    loop {
        let state = orchestrator.state().expect("game started");

        println!();
        if let Some(ticker) = view::news_ticker(state) {
            println!("{ticker}");
        }
        println!("{}", view::macro_header(state));
        println!();
        println!("{}", view::render(state, tab));

        if let Some(banner) = view::game_over(state) {
            println!("{banner}");
            break;
        }

        println!("Alocação do excedente: {surplus_allocation}");
        println!("Comandos: A/B/C decide | 1-4 alocação | alocar <texto> | geral/pj/pf/carteira | sair");
        let line = prompt_line(&mut input, "> ")?;
        let command = line.trim();

        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("sair") {
            println!("Sessão encerrada.");
            break;
        }
        if let Some(new_tab) = Tab::parse(command) {
            tab = new_tab;
            continue;
        }
        if let Ok(n) = command.parse::<usize>() {
            if n >= 1 && n <= SURPLUS_PRESETS.len() {
                surplus_allocation = SURPLUS_PRESETS[n - 1].to_string();
                continue;
            }
        }
        if let Some(custom) = command.strip_prefix("alocar ") {
            let custom = custom.trim();
            if !custom.is_empty() {
                surplus_allocation = custom.to_string();
            }
            continue;
        }

        let Some(choice_id) = OptionId::parse(command) else {
            println!("Comando desconhecido. Use A/B/C, 1-4, alocar <texto>, geral/pj/pf/carteira ou sair.");
            continue;
        };

        let decision = Decision {
            choice_id,
            surplus_allocation: surplus_allocation.clone(),
        };
        println!("Resolvendo turno...");
        match orchestrator.advance(decision) {
            Ok(_) => {
                // New month always opens on the overview.
                tab = Tab::Overview;
            }
            Err(e) => {
                log::warn!("advance failed: {e}");
                println!();
                println!("{}", turn_failure_message(&e));
            }
        }
    }

    if let Some(state) = orchestrator.state() {
        println!();
        println!("=== RESUMO DA SESSÃO ===");
        println!("  empresa:     {}", state.company_name);
        println!("  CEO:         {}", state.player_name);
        println!("  meses:       {}", state.turn);
        println!(
            "  patrimônio:  {}",
            tycoon_core::format::format_brl(state.personal.net_worth)
        );
        println!(
            "  duração:     {}s",
            (chrono::Local::now() - started_at).num_seconds()
        );
    }

    Ok(())
}

/// One user-facing line per failure category. Connectivity and malformed
/// payloads read differently; both keep the previous state intact.
fn turn_failure_message(error: &GameError) -> &'static str {
    if error.is_connectivity() {
        "O Mestre do Jogo está silencioso (Erro de Rede). Tente novamente."
    } else {
        "O Mestre do Jogo respondeu algo ilegível. Tente novamente."
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        anyhow::bail!("entrada encerrada (EOF)");
    }
    Ok(line)
}

fn prompt_nonempty(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    loop {
        let line = prompt_line(input, prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        println!("Campo obrigatório.");
    }
}
