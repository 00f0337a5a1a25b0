//! Interactive session: exploration, then the accusation

use crate::console::{Prompt, Theme, INTRO, LOGO, RULE};
use crate::data::{Room, ROSTER};
use crate::game::{CaseReport, Choice, Explorer, Game, GamePhase, Step, Verdict};
use crate::{GameError, Result};
use std::io::{BufRead, Write};

/// Application state
pub struct App<R, W> {
    prompt: Prompt<R>,
    out: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, out: W, theme: Theme) -> Self {
        Self {
            prompt: Prompt::new(input),
            out,
            theme,
        }
    }

    /// Play a whole session and return its report
    pub fn run(&mut self, game: &mut Game) -> Result<CaseReport> {
        writeln!(self.out, "{}", self.theme.bold(LOGO, self.theme.header))?;
        writeln!(self.out, "{}\n", INTRO)?;

        self.explore(game)?;

        let verdict = match game.finish_exploration() {
            GamePhase::Accusing => Some(self.accusation(game)?),
            _ => {
                writeln!(self.out, "\n{}", self.theme.paint("Voce nao coletou nenhuma pista!", self.theme.alert))?;
                writeln!(self.out, "Explore mais a mansao antes de fazer uma acusacao.")?;
                None
            }
        };

        self.out.flush()?;
        Ok(game.report(verdict.as_ref()))
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn explore(&mut self, game: &mut Game) -> Result<()> {
        let mut explorer = Explorer::new(&game.mansion);
        let step = explorer.start(&mut game.case);
        game.stats.track(&step);
        self.render_step(&step)?;

        while let Some(room) = explorer.current() {
            self.render_menu(room)?;
            let key = self
                .prompt
                .read_key()?
                .ok_or(GameError::InputClosed("a navigation choice"))?;

            match Choice::from_key(key) {
                Some(choice) => {
                    let step = explorer.choose(choice, &mut game.case);
                    game.stats.track(&step);
                    self.render_step(&step)?;
                }
                None => {
                    tracing::debug!(%key, "unrecognised key");
                    game.stats.invalid_choices += 1;
                    self.render_invalid()?;
                }
            }
        }

        writeln!(self.out, "\n{}", self.theme.paint(&game.check_status(), self.theme.border))?;
        Ok(())
    }

    fn render_step(&mut self, step: &Step<'_>) -> Result<()> {
        match step {
            Step::Entered { room, discovery } => {
                let title = format!("=== Voce esta na sala: {} ===", room.name);
                writeln!(self.out, "\n{}", self.theme.bold(&title, self.theme.accent))?;
                if let Some(found) = discovery {
                    let line = format!(">>> Pista encontrada: {}", found.clue);
                    writeln!(self.out, "{}", self.theme.paint(&line, self.theme.clue))?;
                }
            }
            Step::Returned { room } => {
                let title = format!("=== Voce voltou para: {} ===", room.name);
                writeln!(self.out, "\n{}", self.theme.bold(&title, self.theme.accent))?;
            }
            Step::Blocked(_) => self.render_invalid()?,
            Step::Finished => {}
        }
        Ok(())
    }

    fn render_menu(&mut self, room: &Room) -> Result<()> {
        writeln!(self.out, "\nOpcoes:")?;
        for direction in room.exits() {
            writeln!(self.out, "  [{}] {}", direction.key(), direction.label())?;
        }
        writeln!(self.out, "  [{}] Sair e continuar exploracao", Choice::EXIT_KEY)?;
        write!(self.out, "Escolha: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_invalid(&mut self) -> Result<()> {
        let text = "Opcao invalida ou caminho nao disponivel.";
        writeln!(self.out, "{}", self.theme.paint(text, self.theme.alert))?;
        Ok(())
    }

    fn accusation(&mut self, game: &mut Game) -> Result<Verdict> {
        writeln!(self.out, "\n\n{}", RULE)?;
        writeln!(self.out, "{}", self.theme.bold("FASE FINAL: ACUSACAO", self.theme.header))?;
        writeln!(self.out, "{}", RULE)?;

        writeln!(self.out, "\nPistas coletadas durante a investigacao:")?;
        for clue in &game.case.clues {
            writeln!(self.out, "  - {}", self.theme.paint(clue, self.theme.clue))?;
        }

        writeln!(self.out, "\n\nSuspeitos conhecidos:")?;
        for (i, suspect) in ROSTER.iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, suspect)?;
        }

        write!(self.out, "\nQuem voce acusa como culpado? ")?;
        self.out.flush()?;
        let accused = self
            .prompt
            .read_line()?
            .ok_or(GameError::InputClosed("an accusation"))?;

        let verdict = game.accuse(&accused)?;
        self.render_verdict(&verdict)?;
        Ok(verdict)
    }

    fn render_verdict(&mut self, verdict: &Verdict) -> Result<()> {
        writeln!(self.out, "\n{}", RULE)?;
        writeln!(self.out, "{}", self.theme.bold("VEREDITO", self.theme.header))?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Pistas apontando para {}: {}", verdict.accused, verdict.evidence)?;

        if verdict.is_guilty() {
            let headline = self.theme.bold("Parabens! Voce reuniu evidencias suficientes!", self.theme.success);
            writeln!(self.out, "\n{}", headline)?;
            writeln!(self.out, "O juiz aceita sua acusacao contra {}.", verdict.accused)?;
            writeln!(self.out, "O caso foi resolvido com sucesso!")?;
        } else {
            let headline = self.theme.bold("Evidencias insuficientes!", self.theme.alert);
            writeln!(self.out, "\n{}", headline)?;
            writeln!(
                self.out,
                "Voce precisa de pelo menos {} pistas para sustentar a acusacao.",
                verdict.threshold
            )?;
            writeln!(self.out, "O caso permanece em aberto...")?;
        }
        writeln!(self.out, "{}", RULE)?;
        Ok(())
    }
}
