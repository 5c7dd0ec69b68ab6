use crate::app::console::{Console, LotContext};
use crate::core::{InputSource, Result};
use crate::utils::error::ParkingError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// User and admin consoles side by side, then billing
    #[default]
    Lot,
    User,
    Admin,
    Billing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    Billing,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
            Role::Billing => write!(f, "billing"),
        }
    }
}

/// 依模式啟動主控台。`io` 為每個角色提供各自的輸入與輸出
pub async fn run<F, I, W>(ctx: LotContext, mode: Mode, io: F) -> Result<()>
where
    F: Fn(Role) -> (I, W),
    I: InputSource + 'static,
    W: Write + Send + 'static,
{
    tracing::info!("🅿️ Session started in {:?} mode with {} spaces", mode, ctx.registry.lock().len());

    match mode {
        Mode::Lot => {
            let (input, output) = io(Role::User);
            let user = spawn_console(Role::User, ctx.clone(), input, output);
            let (input, output) = io(Role::Admin);
            let admin = spawn_console(Role::Admin, ctx.clone(), input, output);

            let (user, admin) = tokio::join!(user, admin);
            join_result(Role::User, user)?;
            join_result(Role::Admin, admin)?;

            let (input, output) = io(Role::Billing);
            let billing = spawn_console(Role::Billing, ctx, input, output).await;
            join_result(Role::Billing, billing)?;
        }
        Mode::User => run_single(Role::User, ctx, &io).await?,
        Mode::Admin => run_single(Role::Admin, ctx, &io).await?,
        Mode::Billing => run_single(Role::Billing, ctx, &io).await?,
    }

    tracing::info!("✅ Session finished");
    Ok(())
}

async fn run_single<F, I, W>(role: Role, ctx: LotContext, io: &F) -> Result<()>
where
    F: Fn(Role) -> (I, W),
    I: InputSource + 'static,
    W: Write + Send + 'static,
{
    let (input, output) = io(role);
    let handle = spawn_console(role, ctx, input, output).await;
    join_result(role, handle)
}

fn spawn_console<I, W>(
    role: Role,
    ctx: LotContext,
    input: I,
    output: W,
) -> tokio::task::JoinHandle<Result<()>>
where
    I: InputSource + 'static,
    W: Write + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        tracing::debug!("{} console started", role);
        let mut console = Console::new(ctx, input, output);
        let outcome = match role {
            Role::User => console.run_user_loop(),
            Role::Admin => console.run_admin_loop(),
            Role::Billing => console.run_billing(),
        };
        tracing::debug!("{} console exited", role);
        outcome
    })
}

fn join_result(
    role: Role,
    joined: std::result::Result<Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    joined.map_err(|e| ParkingError::TaskError {
        message: format!("{} console: {}", role, e),
    })?
}
