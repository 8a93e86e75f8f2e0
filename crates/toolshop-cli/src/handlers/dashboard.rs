use crate::presentation::Renderer;
use anyhow::Result;
use std::io;
use toolshop_engine::Confirm;
use toolshop_runtime::Backoffice;

pub fn handle<C: Confirm>(backoffice: &Backoffice<C>, renderer: Renderer) -> Result<()> {
    let summary = backoffice.dashboard();
    renderer.dashboard(&mut io::stdout().lock(), &summary)
}
