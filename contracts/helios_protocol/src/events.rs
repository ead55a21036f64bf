use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub developer: Address,
    pub token: Address,
    pub funding_goal: i128,
    pub funding_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentMade {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub funding_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectActivated {
    pub project_id: u64,
    pub start_date: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSubmitted {
    pub project_id: u64,
    pub report_id: u32,
    pub reporter: Address,
    pub energy_produced: u64,
    pub revenue: i128,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportVerified {
    pub project_id: u64,
    pub report_id: u32,
    pub oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnsClaimed {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnsDue {
    pub project_id: u64,
    pub month_index: u32,
    pub net_revenue: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCompleted {
    pub project_id: u64,
    pub total_return_distributed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCancelled {
    pub project_id: u64,
    pub funding_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentRefunded {
    pub project_id: u64,
    pub investor: Address,
    pub amount: i128,
}

pub fn emit_project_created(
    env: &Env,
    project_id: u64,
    developer: Address,
    token: Address,
    funding_goal: i128,
    funding_deadline: u64,
) {
    let topics = (symbol_short!("created"), project_id);
    let data = ProjectCreated {
        project_id,
        developer,
        token,
        funding_goal,
        funding_deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_investment_made(
    env: &Env,
    project_id: u64,
    investor: Address,
    amount: i128,
    funding_raised: i128,
) {
    let topics = (symbol_short!("invested"), project_id);
    let data = InvestmentMade {
        project_id,
        investor,
        amount,
        funding_raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_project_activated(env: &Env, project_id: u64, start_date: u64) {
    let topics = (symbol_short!("activated"), project_id);
    let data = ProjectActivated {
        project_id,
        start_date,
    };
    env.events().publish(topics, data);
}

pub fn emit_report_submitted(
    env: &Env,
    project_id: u64,
    report_id: u32,
    reporter: Address,
    energy_produced: u64,
    revenue: i128,
    verified: bool,
) {
    let topics = (symbol_short!("reported"), project_id);
    let data = ReportSubmitted {
        project_id,
        report_id,
        reporter,
        energy_produced,
        revenue,
        verified,
    };
    env.events().publish(topics, data);
}

pub fn emit_report_verified(env: &Env, project_id: u64, report_id: u32, oracle: Address) {
    let topics = (symbol_short!("verified"), project_id);
    let data = ReportVerified {
        project_id,
        report_id,
        oracle,
    };
    env.events().publish(topics, data);
}

pub fn emit_returns_claimed(env: &Env, project_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), project_id);
    let data = ReturnsClaimed {
        project_id,
        investor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_returns_due(env: &Env, project_id: u64, month_index: u32, net_revenue: i128) {
    let topics = (symbol_short!("retdue"), project_id);
    let data = ReturnsDue {
        project_id,
        month_index,
        net_revenue,
    };
    env.events().publish(topics, data);
}

pub fn emit_project_completed(env: &Env, project_id: u64, total_return_distributed: i128) {
    let topics = (symbol_short!("completed"), project_id);
    let data = ProjectCompleted {
        project_id,
        total_return_distributed,
    };
    env.events().publish(topics, data);
}

pub fn emit_project_cancelled(env: &Env, project_id: u64, funding_raised: i128) {
    let topics = (symbol_short!("cancelled"), project_id);
    let data = ProjectCancelled {
        project_id,
        funding_raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_investment_refunded(env: &Env, project_id: u64, investor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), project_id);
    let data = InvestmentRefunded {
        project_id,
        investor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_developer_granted(env: &Env, target: Address) {
    env.events().publish((symbol_short!("dev_grant"), target), ());
}

pub fn emit_developer_revoked(env: &Env, target: Address) {
    env.events().publish((symbol_short!("dev_rvk"), target), ());
}

pub fn emit_oracle_granted(env: &Env, target: Address) {
    env.events().publish((symbol_short!("orc_grant"), target), ());
}

pub fn emit_oracle_revoked(env: &Env, target: Address) {
    env.events().publish((symbol_short!("orc_rvk"), target), ());
}
