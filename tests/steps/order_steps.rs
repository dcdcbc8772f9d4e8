//! Order lifecycle steps.

use cucumber::{then, when};
use mocktrade_e2e::prelude::*;
use rust_decimal::Decimal;

use crate::TradeWorld;

const PRICE_TOLERANCE: f64 = 0.01;

#[when(expr = "I create a {word} order for {string} with quantity {int} and price {float}")]
async fn create_order(
    world: &mut TradeWorld,
    side: String,
    symbol: String,
    qty: i64,
    price: Decimal,
) -> HarnessResult<()> {
    let payload = factory::simple_order_for_symbol(&world.config, &side, &symbol, qty, price);
    let response = world.client.orders().create(&payload).await?;
    world.session.set_last_response(response);

    let response = world.session.require_last_response()?;
    assert_status_code(response, 200)?;
    if let Some(id) = response.field_id("id") {
        tracing::info!(order_id = %id, "Created order");
        world.session.set_last_order_id(OrderId::from(id));
    }
    Ok(())
}

#[when(expr = "I book a {word} order for {string} quantity {int} price {float}")]
async fn book_order(
    world: &mut TradeWorld,
    side: String,
    symbol: String,
    qty: i64,
    price: Decimal,
) -> HarnessResult<()> {
    create_order(world, side, symbol, qty, price).await
}

#[when("I fetch the order")]
async fn fetch_order(world: &mut TradeWorld) -> HarnessResult<()> {
    let order_id = world.session.require_last_order_id()?.clone();
    let response = world.client.orders().get(&order_id).await?;
    world.session.set_last_response(response);
    Ok(())
}

#[when("I cancel the order")]
async fn cancel_order(world: &mut TradeWorld) -> HarnessResult<()> {
    let order_id = world.session.require_last_order_id()?.clone();
    let response = world.client.orders().cancel(&order_id).await?;
    world.session.set_last_response(response);
    assert_status_code(world.session.require_last_response()?, 200)?;
    Ok(())
}

#[when("I simulate a fill for that order")]
async fn simulate_fill(world: &mut TradeWorld) -> HarnessResult<()> {
    let order_id = world.session.require_last_order_id()?.clone();
    let response = world.client.orders().simulate_fill(&order_id).await?;
    world.session.set_last_response(response);
    assert_status_code(world.session.require_last_response()?, 200)?;
    Ok(())
}

#[then("the order should be created successfully")]
fn order_created(world: &mut TradeWorld) -> HarnessResult<()> {
    let response = world.session.require_last_response()?;
    assert_status_code(response, 200)?;
    assert_response_contains_field(response, "id")?;
    assert_response_field_equals(response, "status", "NEW")?;
    Ok(())
}

#[then("I should see the order in the order list")]
async fn order_in_list(world: &mut TradeWorld) -> HarnessResult<()> {
    let order_id = world.session.require_last_order_id()?.clone();
    let response = world.client.orders().list().await?;
    assert_status_code(&response, 200)?;
    assert_response_body_contains(&response, order_id.as_str())?;
    Ok(())
}

#[then(expr = "the order status should be {string}")]
fn order_status_should_be(world: &mut TradeWorld, expected: String) -> HarnessResult<()> {
    assert_response_field_equals(world.session.require_last_response()?, "status", expected)?;
    Ok(())
}

#[then(expr = "the order should have {word} side")]
fn order_side(world: &mut TradeWorld, side: String) -> HarnessResult<()> {
    assert_response_field_equals(
        world.session.require_last_response()?,
        "side",
        side.to_uppercase(),
    )?;
    Ok(())
}

#[then(expr = "the order should have quantity {int}")]
fn order_quantity(world: &mut TradeWorld, qty: i64) -> HarnessResult<()> {
    assert_response_field_equals(world.session.require_last_response()?, "qty", qty)?;
    Ok(())
}

#[then(expr = "the order should have price {float}")]
fn order_price(world: &mut TradeWorld, price: f64) -> HarnessResult<()> {
    assert_response_field_approx(
        world.session.require_last_response()?,
        "price",
        price,
        PRICE_TOLERANCE,
    )?;
    Ok(())
}

#[then("the order should be cancelled")]
fn order_cancelled(world: &mut TradeWorld) -> HarnessResult<()> {
    assert_response_field_equals(world.session.require_last_response()?, "status", "CANCELLED")?;
    Ok(())
}

#[then("the order should be filled")]
fn order_filled(world: &mut TradeWorld) -> HarnessResult<()> {
    assert_response_field_equals(world.session.require_last_response()?, "status", "FILLED")?;
    Ok(())
}
