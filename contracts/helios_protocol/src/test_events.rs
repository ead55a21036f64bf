extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{
    InvestmentMade, InvestmentRefunded, ProjectActivated, ProjectCancelled, ProjectCreated,
    ReportSubmitted, ReturnsClaimed, ReturnsDue,
};
use crate::test_utils::TestContext;

#[test]
fn test_project_created_event() {
    let ctx = TestContext::new();
    let (project, token, _) = ctx.setup_project(5_000);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, ctx.client.address);
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("created").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectCreated = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            project_id: project.id,
            developer: ctx.developer.clone(),
            token: token.address.clone(),
            funding_goal: 5_000,
            funding_deadline: project.funding_deadline,
        }
    );
}

#[test]
fn test_investment_made_event() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_project(10_000);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 400);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &ctx.env,
        symbol_short!("invested").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: InvestmentMade = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        InvestmentMade {
            project_id: project.id,
            investor: investor.clone(),
            amount: 400,
            funding_raised: 400,
        }
    );
}

#[test]
fn test_activation_event_fires_once_at_goal() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_project(1_000);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 1_000);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &ctx.env,
        symbol_short!("activated").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectActivated = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        ProjectActivated {
            project_id: project.id,
            start_date: ctx.env.ledger().timestamp(),
        }
    );
}

#[test]
fn test_report_submitted_event() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_project(1_000);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 1_000);

    ctx.client.submit_report(&ctx.developer, &project.id, &120);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &ctx.env,
        symbol_short!("reported").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReportSubmitted = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        ReportSubmitted {
            project_id: project.id,
            report_id: 0,
            reporter: ctx.developer.clone(),
            energy_produced: 120,
            revenue: 6_000,
            verified: false,
        }
    );
}

#[test]
fn test_returns_claimed_event() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_fixed_project(1_000, 1_200);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 1_000);

    ctx.jump_months(1);
    let payout = ctx.client.claim_returns(&investor, &project.id);

    // The payout transfer publishes after our event; look one back.
    let all_events = ctx.env.events().all();
    let claim_event = all_events.get(all_events.len() - 2).expect("No events found");

    assert_eq!(claim_event.0, ctx.client.address);
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("claimed").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(claim_event.1, expected_topics);

    let event_data: ReturnsClaimed = claim_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        ReturnsClaimed {
            project_id: project.id,
            investor: investor.clone(),
            amount: payout,
        }
    );
}

#[test]
fn test_cancellation_and_refund_events() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_project(10_000);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 700);

    ctx.jump_time(31 * 86_400);
    ctx.client.cancel_project(&project.id);

    let all_events = ctx.env.events().all();
    let cancel_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("cancelled").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(cancel_event.1, expected_topics);
    let cancel_data: ProjectCancelled = cancel_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(cancel_data.funding_raised, 700);

    ctx.client.refund_investment(&investor, &project.id);

    // The refund transfer publishes after our event; look one back.
    let all_events = ctx.env.events().all();
    let refund_event = all_events.get(all_events.len() - 2).expect("No events found");
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("refunded").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(refund_event.1, expected_topics);
    let refund_data: InvestmentRefunded = refund_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        refund_data,
        InvestmentRefunded {
            project_id: project.id,
            investor: investor.clone(),
            amount: 700,
        }
    );
}

#[test]
fn test_returns_due_signal_event() {
    let ctx = TestContext::new();
    let (project, _, sac) = ctx.setup_project(1_000);
    let investor = ctx.generate_address();
    ctx.invest(&sac, &investor, project.id, 1_000);
    ctx.client.submit_report(&ctx.oracle, &project.id, &100);

    ctx.jump_months(2);
    ctx.client
        .distribute_monthly_returns(&ctx.admin, &project.id);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("retdue").into_val(&ctx.env),
        project.id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ReturnsDue = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        ReturnsDue {
            project_id: project.id,
            month_index: crate::returns::month_index(ctx.env.ledger().timestamp()),
            net_revenue: 5_000,
        }
    );
}
