use crate::core::fee::FeeRate;
use crate::core::registry::{Registry, SharedRegistry};
use crate::core::{admin, billing, user, Clock, ConfigProvider, InputSource, Result, SpaceId};
use crate::utils::error::ParkingError;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

pub const USER_MENU: &str = "1. View available spaces\n2. Reserve a space\n3. Exit";
pub const ADMIN_MENU: &str = "1. View statistics\n2. Manage spaces\n3. Exit";

/// 所有主控台共用的停車場狀態
#[derive(Clone)]
pub struct LotContext {
    pub registry: SharedRegistry,
    pub clock: Arc<dyn Clock>,
    pub rate: FeeRate,
    pub currency_symbol: String,
}

impl LotContext {
    pub fn new(
        registry: SharedRegistry,
        clock: Arc<dyn Clock>,
        rate: FeeRate,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            clock,
            rate,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Registry::shared(config.total_spaces()),
            clock,
            FeeRate::per_minute(config.rate_per_minute()),
            config.currency_symbol(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exiting,
}

pub struct Console<I, W> {
    ctx: LotContext,
    input: I,
    output: W,
}

impl<I: InputSource, W: Write> Console<I, W> {
    pub fn new(ctx: LotContext, input: I, output: W) -> Self {
        Self { ctx, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run_user_loop(&mut self) -> Result<()> {
        self.run_menu(USER_MENU, Self::handle_user_choice)
    }

    pub fn run_admin_loop(&mut self) -> Result<()> {
        self.run_menu(ADMIN_MENU, Self::handle_admin_choice)
    }

    /// 單次結帳流程；輸入無效時重新提示
    pub fn run_billing(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt("Enter space ID to generate bill: ")? else {
                return Ok(());
            };
            let raw_id = match parse_number::<i64>(&line) {
                Ok(raw_id) => raw_id,
                Err(e) => {
                    self.recover(Err(e))?;
                    continue;
                }
            };

            let now = self.ctx.clock.now();
            let outcome = space_id(raw_id)
                .and_then(|id| billing::bill(&mut self.ctx.registry.lock(), id, now, self.ctx.rate));
            match outcome {
                Ok(bill) => {
                    tracing::info!(
                        "🧾 Space {} billed {} for {} minutes ({} -> {})",
                        bill.space_id,
                        bill.fee,
                        bill.minutes,
                        bill.occupied_since,
                        bill.billed_at
                    );
                    // 費用原樣輸出，不做四捨五入
                    writeln!(
                        self.output,
                        "Total fee for space {}: {}{}",
                        bill.space_id, self.ctx.currency_symbol, bill.fee
                    )?;
                }
                Err(e) => {
                    self.recover(Err(e))?;
                }
            }
            self.output.flush()?;
            return Ok(());
        }
    }

    fn run_menu(&mut self, menu: &str, handler: fn(&mut Self, u32) -> Result<LoopState>) -> Result<()> {
        let mut state = LoopState::Running;
        while state == LoopState::Running {
            writeln!(self.output, "{}", menu)?;
            self.output.flush()?;

            state = match self.input.read_line()? {
                None => LoopState::Exiting,
                Some(line) => {
                    let outcome = parse_number::<u32>(&line).and_then(|choice| handler(self, choice));
                    self.recover(outcome)?
                }
            };
        }
        self.output.flush()?;
        Ok(())
    }

    fn handle_user_choice(&mut self, choice: u32) -> Result<LoopState> {
        match choice {
            1 => {
                let available = user::view_available(&self.ctx.registry.lock());
                for id in available {
                    writeln!(self.output, "Space {} is available.", id)?;
                }
            }
            2 => {
                let Some(raw_id) = self.prompt_number::<i64>("Enter space ID: ")? else {
                    return Ok(LoopState::Exiting);
                };
                let now = self.ctx.clock.now();
                let outcome =
                    space_id(raw_id).and_then(|id| user::reserve(&mut self.ctx.registry.lock(), id, now));
                match outcome {
                    Ok(()) => writeln!(self.output, "Space {} has been reserved.", raw_id)?,
                    // 找不到與已佔用對使用者都顯示同一訊息
                    Err(ParkingError::SpaceNotFound(_) | ParkingError::SpaceAlreadyOccupied(_)) => {
                        writeln!(self.output, "Space not available.")?
                    }
                    Err(e) => return Err(e),
                }
            }
            3 => return Ok(LoopState::Exiting),
            other => return Err(ParkingError::InvalidMenuChoice(other.to_string())),
        }
        Ok(LoopState::Running)
    }

    fn handle_admin_choice(&mut self, choice: u32) -> Result<LoopState> {
        match choice {
            1 => {
                let stats = admin::statistics(&self.ctx.registry.lock());
                writeln!(self.output, "Occupied spaces: {}", stats.occupied)?;
                writeln!(self.output, "Total spaces: {}", stats.total)?;
            }
            2 => {
                let Some(raw_id) = self.prompt_number::<i64>("Enter space ID: ")? else {
                    return Ok(LoopState::Exiting);
                };
                let Some(flag) = self.prompt("Enter 1 to occupy, 0 to vacate: ")? else {
                    return Ok(LoopState::Exiting);
                };
                let occupy = parse_flag(&flag)?;
                let id = space_id(raw_id)?;
                let now = self.ctx.clock.now();
                admin::set_occupancy(&mut self.ctx.registry.lock(), id, occupy, now)?;
            }
            3 => return Ok(LoopState::Exiting),
            other => return Err(ParkingError::InvalidMenuChoice(other.to_string())),
        }
        Ok(LoopState::Running)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.read_line()
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        match self.prompt(text)? {
            Some(line) => parse_number(&line).map(Some),
            None => Ok(None),
        }
    }

    /// 可恢復的錯誤只印出訊息，迴圈繼續
    fn recover(&mut self, outcome: Result<LoopState>) -> Result<LoopState> {
        match outcome {
            Ok(state) => Ok(state),
            Err(e) if e.is_recoverable() => {
                if matches!(e, ParkingError::InvalidMenuChoice(_)) {
                    tracing::warn!("⚠️ {}", e);
                } else {
                    tracing::debug!("{}", e);
                }
                writeln!(self.output, "{}", e.user_friendly_message())?;
                Ok(LoopState::Running)
            }
            Err(e) => Err(e),
        }
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ParkingError::InvalidMenuChoice(trimmed.to_string()))
}

/// Integers outside the `SpaceId` range name no space.
fn space_id(raw: i64) -> Result<SpaceId> {
    SpaceId::try_from(raw).map_err(|_| ParkingError::SpaceNotFound(raw))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(ParkingError::InvalidMenuChoice(other.to_string())),
    }
}
