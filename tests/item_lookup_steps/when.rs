//! When steps for item lookup BDD scenarios.

use super::world::{ItemLookupWorld, run_async};
use quartermaster::item::{
    adapters::memory::RecordingResponder,
    domain::{ChannelId, CommandInvocation},
};
use rstest_bdd_macros::when;

#[when(r#""{query}" is requested from channel {channel:u64}"#)]
fn query_is_requested(
    world: &mut ItemLookupWorld,
    query: String,
    channel: u64,
) -> Result<(), eyre::Report> {
    let service = world.service();
    let responder = RecordingResponder::new();
    let invocation = CommandInvocation::new(ChannelId::new(channel), query);
    run_async(service.handle(&invocation, &responder))
        .map_err(|err| eyre::eyre!("reply delivery failed: {err}"))?;
    world.responder = Some(responder);
    Ok(())
}
