//! Steps shared by every feature: availability, status and field checks.

use cucumber::{given, then};
use mocktrade_e2e::prelude::*;

use crate::TradeWorld;

#[given("the API is available")]
async fn api_is_available(world: &mut TradeWorld) -> HarnessResult<()> {
    let response = world.client.orders().list().await?;
    world.session.set_last_response(response);
    assert_status_code(world.session.require_last_response()?, 200)?;
    Ok(())
}

#[then(expr = "the API response status should be {int}")]
fn response_status_should_be(world: &mut TradeWorld, expected: u16) -> HarnessResult<()> {
    assert_status_code(world.session.require_last_response()?, expected)?;
    Ok(())
}

#[then(expr = "the response should contain field {string}")]
fn response_should_contain_field(world: &mut TradeWorld, field_path: String) -> HarnessResult<()> {
    assert_response_contains_field(world.session.require_last_response()?, &field_path)?;
    Ok(())
}
