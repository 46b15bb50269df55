use crate::priority::{
    error::SignalError,
    ports::{AgentSignals, WorldSignals},
    settings::{CircuitBreaker, ConsiderationSettings, PolicyStore},
    state::ScoreState,
    types::{AgentId, Passion, SkillRecord, TaskCategory},
};

/// Everything one consideration may read. All references are shared:
/// considerations never mutate anything but the score state they are
/// handed.
pub struct EvalContext<'a> {
    pub agent_id: &'a AgentId,
    pub agent: &'a dyn AgentSignals,
    pub world: &'a dyn WorldSignals,
    pub category: &'a TaskCategory,
    pub policy: &'a PolicyStore,
    pub settings: &'a ConsiderationSettings,
}

/// One rule in the ordered chain. Returns the next state; an `Err` means
/// the consideration faulted and the pipeline restores the pre-call state.
pub type Consideration = fn(ScoreState, &EvalContext<'_>) -> Result<ScoreState, SignalError>;

/// Logs a breaker-gated consideration's fault and trips its breaker so
/// later evaluations skip it entirely. Returns `None` on fault.
fn breaker_guard<T>(
    ctx: &EvalContext<'_>,
    breaker: &CircuitBreaker,
    name: &'static str,
    query: Result<T, SignalError>,
) -> Option<T> {
    match query {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                target: "priority",
                agent = %ctx.agent_id,
                category = %ctx.category,
                consideration = name,
                error = %err,
                "consideration faulted; disabling it for future evaluations"
            );
            breaker.trip();
            None
        }
    }
}

// --- base considerations -------------------------------------------------
//
// These establish a category's starting posture and run first in their
// dispatch lists; skill-based and expectation-based considerations below
// also overwrite rather than adjust.

pub(crate) fn base_firefighting(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let downed = ctx.agent.is_downed()?;
    Ok(state
        .reset(0.0, "firefighting default")
        .always_do("firefighting default")
        .never_do_if(downed, "agent is downed"))
}

pub(crate) fn base_patient(
    state: ScoreState,
    _ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    Ok(state.reset(0.0, "patient default").always_do("patient default"))
}

pub(crate) fn base_bedrest(
    state: ScoreState,
    _ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    Ok(state.reset(0.0, "bedrest default").always_do("bedrest default"))
}

pub(crate) fn base_basic_work(
    state: ScoreState,
    _ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    Ok(state.reset(0.5, "basic work default"))
}

pub(crate) fn downed_guard(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let downed = ctx.agent.is_downed()?;
    Ok(state.never_do_if(downed, "agent is downed"))
}

/// Hard precondition checked before any dispatch list runs.
pub(crate) fn permanently_unavailable(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.agent.permanently_unavailable(ctx.category)? {
        return Ok(state.never_do("permanently unavailable"));
    }
    Ok(state)
}

// --- skill and preference -----------------------------------------------

/// Maps the agent's average relevant skill (0–20) through a five-bucket
/// threshold table onto a base desirability. The lowest cutoff scales with
/// colony size so tiny colonies still spread work around; the remaining
/// cutoffs halve the distance toward 20. Overwrites the score: this is the
/// category's base value, not an adjustment.
pub(crate) fn consider_relevant_skills(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let num_agents = ctx.world.num_agents()? as f32;
    let bad = 3.0_f32.min(num_agents);
    let good = bad + (20.0 - bad) / 2.0;
    let great = good + (20.0 - good) / 2.0;
    let excellent = great + (20.0 - great) / 2.0;

    let average = ctx.agent.average_relevant_skill(ctx.category)?;
    let score = if average >= excellent {
        0.9
    } else if average >= great {
        0.7
    } else if average >= good {
        0.5
    } else if average >= bad {
        0.3
    } else {
        0.1
    };
    Ok(state.reset(score, &format!("skill level {average:.0}")))
}

/// Additive bonus per passionate relevant skill, scaled by current mood
/// and split evenly across the category's skills. Unknown tiers defer to
/// the interests framework when one is present.
pub(crate) fn consider_passion(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let skills = ctx.agent.relevant_skills(ctx.category)?;
    if skills.is_empty() {
        return Ok(state);
    }
    let mood = ctx.agent.mood_level()?;
    let count = skills.len() as f32;

    let mut state = state;
    for skill in &skills {
        let (weight, tier) = match skill.passion {
            Passion::None => continue,
            Passion::Major => (0.5, "major"),
            Passion::Minor => (0.25, "minor"),
            Passion::Apathy => (0.15, "apathetic"),
            Passion::Natural => (0.4, "natural"),
            Passion::Critical => (0.75, "critical"),
            Passion::Tier(index) => {
                state = consider_interest(state, ctx, skill, index, count, mood);
                continue;
            }
        };
        state = state.add(
            mood * weight / count,
            &format!("{tier} passion for {}", skill.label),
        );
    }
    Ok(state)
}

/// Interests-framework tier handling: per-tier label lookup, then the
/// label's own rule. Self-disables on fault since the framework is a mod
/// surface the host may withdraw at any time.
fn consider_interest(
    state: ScoreState,
    ctx: &EvalContext<'_>,
    skill: &SkillRecord,
    index: u8,
    count: f32,
    mood: f32,
) -> ScoreState {
    let breaker = &ctx.settings.breakers.interests;
    if breaker.is_open() {
        return state;
    }
    let Some(present) = breaker_guard(
        ctx,
        breaker,
        "interest",
        ctx.world.interests_framework_present(),
    ) else {
        return state;
    };
    if !present {
        return state;
    }
    let Some(label) = breaker_guard(ctx, breaker, "interest", ctx.world.interest_label(index))
    else {
        return state;
    };
    let Some(label) = label else {
        tracing::debug!(target: "priority", index, "no interest label for tier index");
        return state;
    };

    match label.as_str() {
        "minor_aversion" => state.add(
            (1.0 - mood) * -0.25 / count,
            &format!("minor aversion to {}", skill.label),
        ),
        "major_aversion" => state.add(
            (1.0 - mood) * -0.5 / count,
            &format!("major aversion to {}", skill.label),
        ),
        "compulsion" => {
            let Some(thoughts) = breaker_guard(ctx, breaker, "interest", ctx.agent.mood_thoughts())
            else {
                return state;
            };
            for thought in &thoughts {
                let bonus = match (thought.name.as_str(), thought.stage.as_str()) {
                    ("compulsion_unmet", "compulsive itch") => 0.2,
                    ("compulsion_unmet", "compulsive need") => 0.4,
                    ("compulsion_unmet", "compulsive obsession") => 0.6,
                    ("neurotic_compulsion_unmet", "compulsive itch") => 0.3,
                    ("neurotic_compulsion_unmet", "compulsive demand") => 0.6,
                    ("neurotic_compulsion_unmet", "compulsive withdrawal") => 0.9,
                    ("very_neurotic_compulsion_unmet", "compulsive yearning") => 0.4,
                    ("very_neurotic_compulsion_unmet", "compulsive tantrum") => 0.8,
                    ("very_neurotic_compulsion_unmet", "compulsive hysteria") => 1.2,
                    _ => continue,
                };
                return state.add(
                    bonus / count,
                    &format!("{} for {}", thought.stage, skill.label),
                );
            }
            state
        }
        "invigorating" => state.add(0.1 / count, &format!("invigorated by {}", skill.label)),
        "bored" => {
            let Some(idle) = breaker_guard(ctx, breaker, "interest", ctx.agent.is_idle()) else {
                return state;
            };
            if idle {
                state
            } else {
                state.never_do(&format!("bored by {}", skill.label))
            }
        }
        "allergic" => {
            let Some(conditions) =
                breaker_guard(ctx, breaker, "interest", ctx.agent.active_conditions())
            else {
                return state;
            };
            for condition in &conditions {
                if condition.name == "allergic_reaction" {
                    let penalty = match condition.stage.as_str() {
                        "initial" => -0.2,
                        "itching" => -0.5,
                        "sneezing" => -0.8,
                        "swelling" => -1.1,
                        "anaphylaxis" => {
                            return state
                                .never_do(&format!("anaphylactic reaction to {}", skill.label));
                        }
                        _ => continue,
                    };
                    return state.add(
                        penalty / count,
                        &format!("allergic reaction to {}", skill.label),
                    );
                }
            }
            if conditions.is_empty() {
                state
            } else {
                state.add(0.1 / count, &format!("no reaction to {}", skill.label))
            }
        }
        "inspiring" | "stagnant" | "forgetful" | "vocal_hatred" | "natural_genius" => state,
        other => {
            tracing::debug!(target: "priority", label = other, "unrecognized interest label");
            state
        }
    }
}

/// Hunger nudges: hungry agents want cooking done (and dislike the long
/// road of hunting or harvesting); everything else loses a little appeal.
pub(crate) fn consider_thoughts(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let thoughts = ctx.agent.mood_thoughts()?;
    for thought in &thoughts {
        if thought.name == "need_food" {
            let delta = match ctx.category {
                TaskCategory::Cooking => -0.01 * thought.mood_effect,
                TaskCategory::Hunting | TaskCategory::PlantCutting => {
                    -0.005 * thought.mood_effect
                }
                _ => 0.005 * thought.mood_effect,
            };
            return Ok(state.add(delta, "hunger level"));
        }
    }
    Ok(state)
}

pub(crate) fn consider_inspiration(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.agent.inspired_for(ctx.category)? {
        return Ok(state.add(0.4, "inspired"));
    }
    Ok(state)
}

/// Cleaning and hauling only matter to the degree the agent's expectations
/// outstrip how the colony currently looks. Overwrites the score from a
/// fixed expectation-tier × beauty-category grid; lookup failure falls back
/// to a flat 0.3 base.
pub(crate) fn consider_beauty_expectations(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if *ctx.category != TaskCategory::Cleaning && !ctx.category.is_hauling_family() {
        return Ok(state);
    }
    let (tier, beauty) = match (ctx.agent.expectation_tier(), ctx.agent.beauty_category()) {
        (Ok(tier), Ok(beauty)) => (tier, beauty),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(
                target: "priority",
                agent = %ctx.agent_id,
                category = %ctx.category,
                error = %err,
                "expectation lookup failed; using flat base"
            );
            return Ok(state.reset(0.3, "beauty default"));
        }
    };
    let expectation = EXPECTATION_GRID[tier.index()][beauty.index()];
    let reason = if expectation < 0.2 {
        "expectations exceeded"
    } else if expectation < 0.4 {
        "expectations met"
    } else if expectation < 0.6 {
        "expectations unmet"
    } else if expectation < 0.8 {
        "expectations let down"
    } else {
        "expectations ignored"
    };
    Ok(state.reset(expectation, reason))
}

// rows: expectation tiers, extremely_low..royal
// columns: beauty categories, hideous..beautiful
const EXPECTATION_GRID: [[f32; 7]; 8] = [
    [0.3, 0.2, 0.1, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.3, 0.2, 0.1, 0.0, 0.0, 0.0],
    [0.7, 0.5, 0.3, 0.2, 0.1, 0.0, 0.0],
    [0.8, 0.7, 0.5, 0.3, 0.2, 0.1, 0.0],
    [0.9, 0.8, 0.7, 0.5, 0.3, 0.2, 0.1],
    [1.0, 0.9, 0.8, 0.7, 0.5, 0.3, 0.2],
    [1.0, 1.0, 0.9, 0.8, 0.7, 0.5, 0.3],
    [1.0, 1.0, 1.0, 0.9, 0.8, 0.7, 0.5],
];

// --- physical stats ------------------------------------------------------

pub(crate) fn consider_movement_speed(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let weight = ctx.settings.movement_speed_weight;
    if weight == 0.0 || ctx.settings.breakers.movement_speed.is_open() {
        return Ok(state);
    }
    let Some(speed) = breaker_guard(
        ctx,
        &ctx.settings.breakers.movement_speed,
        "movement_speed",
        ctx.agent.movement_speed(),
    ) else {
        return Ok(state);
    };
    Ok(state.multiply(weight * 0.25 * speed, "movement speed"))
}

const BASE_CARRYING_CAPACITY: f32 = 75.0;

/// Hauling suits agents who can actually carry things. Only ever reduces.
pub(crate) fn consider_carrying_capacity(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if !ctx.category.is_hauling_family() {
        return Ok(state);
    }
    let capacity = ctx.agent.carrying_capacity()?;
    if capacity >= BASE_CARRYING_CAPACITY {
        return Ok(state);
    }
    Ok(state.multiply(capacity / BASE_CARRYING_CAPACITY, "carrying capacity"))
}

pub(crate) fn consider_health(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let health = ctx.agent.health_fraction()?;
    if ctx.category.is_patient_family() {
        // small injuries barely register; serious ones dominate
        return Ok(state.add(1.0 - health.powf(7.0), "health"));
    }
    Ok(state.multiply(health, "health"))
}

// --- urgency -------------------------------------------------------------

pub(crate) fn consider_fire(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.world.home_area_fire()? {
        if *ctx.category != TaskCategory::Firefighting {
            return Ok(state.add(-0.2, "fire in the home area"));
        }
        return Ok(state.reset(1.0, "fire in the home area"));
    }
    let fires = ctx.world.map_fires()?;
    if fires > 0 && *ctx.category == TaskCategory::Firefighting {
        return Ok(state.add((fires as f32 * 0.01).clamp(0.0, 1.0), "fires on the map"));
    }
    Ok(state)
}

/// Food is low when the stockpile drops below four units per agent.
pub(crate) fn consider_low_food(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let num_agents = ctx.world.num_agents()? as f32;
    if ctx.world.total_food()? >= 4.0 * num_agents {
        return Ok(state);
    }
    match ctx.category {
        TaskCategory::Cooking => Ok(state.add(0.4, "low food")),
        TaskCategory::Hunting | TaskCategory::PlantCutting => Ok(state.add(0.2, "low food")),
        _ if ctx.category.is_hauling_family() && ctx.world.things_deteriorating()? => {
            Ok(state.add(0.15, "low food"))
        }
        _ => Ok(state),
    }
}

pub(crate) fn consider_refueling(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if !ctx.category.is_hauling_family() {
        return Ok(state);
    }
    if ctx.world.refuel_needed_now()? {
        return Ok(state.add(0.25, "refueling needed"));
    }
    if ctx.world.refuel_needed_soon()? {
        return Ok(state.add(0.10, "refueling needed"));
    }
    Ok(state)
}

pub(crate) fn consider_deteriorating(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.category.is_hauling_family() && ctx.world.things_deteriorating()? {
        return Ok(state.add(0.2, "items deteriorating"));
    }
    Ok(state)
}

pub(crate) fn consider_warm_clothes(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if *ctx.category == TaskCategory::Tailoring && ctx.world.need_warm_clothes()? {
        return Ok(state.add(0.2, "warm clothes needed"));
    }
    Ok(state)
}

pub(crate) fn consider_unburied(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.category.is_hauling_family() && ctx.world.colonist_left_unburied()? {
        return Ok(state.add(0.4, "colonist left unburied"));
    }
    Ok(state)
}

pub(crate) fn consider_injured_pets(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if *ctx.category != TaskCategory::Doctoring {
        return Ok(state);
    }
    let num_agents = ctx.world.num_agents()?;
    if num_agents == 0 {
        return Ok(state);
    }
    let pets = ctx.world.pets_needing_treatment()? as f32;
    let bonus = (pets / num_agents as f32).clamp(0.0, 1.0) * 0.5;
    Ok(state.add(bonus, "injured pets"))
}

pub(crate) fn consider_plants_blighted(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let weight = ctx.settings.plants_blighted_weight;
    if weight == 0.0 || ctx.settings.breakers.plants_blighted.is_open() {
        return Ok(state);
    }
    let Some(blighted) = breaker_guard(
        ctx,
        &ctx.settings.breakers.plants_blighted,
        "plants_blighted",
        ctx.world.plants_blighted(),
    ) else {
        return Ok(state);
    };
    if blighted {
        return Ok(state.add(0.4 * weight, "blight"));
    }
    Ok(state)
}

pub(crate) fn consider_grove_pruning(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let weight = ctx.settings.grove_pruning_weight;
    if weight == 0.0
        || ctx.settings.breakers.grove_pruning.is_open()
        || *ctx.category != TaskCategory::PlantCutting
    {
        return Ok(state);
    }
    let Some(pruning) = breaker_guard(
        ctx,
        &ctx.settings.breakers.grove_pruning,
        "grove_pruning",
        ctx.agent.grove_needs_pruning(),
    ) else {
        return Ok(state);
    };
    if pruning == Some(true) {
        return Ok(state.multiply(2.0 * weight, "grove tree needs pruning"));
    }
    Ok(state)
}

/// A dirty kitchen poisons people: cleaning it gains, cooking in it loses.
pub(crate) fn consider_food_poisoning(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let weight = ctx.settings.food_poisoning_weight;
    if weight == 0.0 || ctx.settings.breakers.food_poisoning.is_open() {
        return Ok(state);
    }
    if *ctx.category != TaskCategory::Cleaning && *ctx.category != TaskCategory::Cooking {
        return Ok(state);
    }
    let Some(chance) = breaker_guard(
        ctx,
        &ctx.settings.breakers.food_poisoning,
        "food_poisoning",
        ctx.agent.room_food_poison_chance(),
    ) else {
        return Ok(state);
    };
    let Some(chance) = chance else {
        return Ok(state);
    };
    let adjustment = weight * 20.0 * chance;
    if *ctx.category == TaskCategory::Cleaning {
        return Ok(state.add(adjustment, "filthy cooking area"));
    }
    Ok(state.add(-adjustment, "filthy cooking area"))
}

pub(crate) fn consider_own_room(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let weight = ctx.settings.own_room_weight;
    if weight == 0.0
        || ctx.settings.breakers.own_room.is_open()
        || *ctx.category != TaskCategory::Cleaning
    {
        return Ok(state);
    }
    let Some(own_room) = breaker_guard(
        ctx,
        &ctx.settings.breakers.own_room,
        "own_room",
        ctx.agent.in_own_room(),
    ) else {
        return Ok(state);
    };
    if own_room {
        return Ok(state.multiply(weight * 2.0, "own room"));
    }
    Ok(state)
}

// --- treatment and downed agents ----------------------------------------

pub(crate) fn consider_treatment(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let percent_needing = ctx.world.percent_agents_needing_treatment()?;
    if percent_needing <= 0.0 {
        return Ok(state);
    }
    if ctx.agent.needs_treatment()? {
        return consider_self_needs_treatment(state, ctx);
    }
    consider_others_need_treatment(state, ctx, percent_needing)
}

fn consider_self_needs_treatment(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.category.is_patient_family() {
        return Ok(state.always_do("needs treatment").reset(1.0, "needs treatment"));
    }
    if *ctx.category == TaskCategory::Doctoring {
        if ctx.agent.can_self_tend()? {
            return Ok(state.always_do("self tend").reset(1.0, "self tend"));
        }
        return Ok(state);
    }
    Ok(state.never_do("needs treatment"))
}

/// While colonists wait for treatment, most other work is capped and the
/// crafting family is capped harder; both caps only ever subtract the
/// excess, never amplify a low score. Depends on the score being current,
/// which is why dispatch order is part of the contract.
fn consider_others_need_treatment(
    state: ScoreState,
    ctx: &EvalContext<'_>,
    percent_needing: f32,
) -> Result<ScoreState, SignalError> {
    match ctx.category {
        TaskCategory::Firefighting | TaskCategory::Bedrest => Ok(state),
        TaskCategory::Doctoring => Ok(state.add(percent_needing, "others need treatment")),
        TaskCategory::Research => Ok(state.never_do("others need treatment")),
        _ if ctx.category.is_crafting_family() => {
            if state.value() > 0.3 {
                let excess = state.value() - 0.3;
                return Ok(state.add(-excess, "others need treatment"));
            }
            Ok(state)
        }
        _ => {
            if state.value() > 0.6 {
                let excess = state.value() - 0.6;
                return Ok(state.add(-excess, "others need treatment"));
            }
            Ok(state)
        }
    }
}

pub(crate) fn consider_downed(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.agent.is_downed()? {
        if ctx.category.is_patient_family() {
            return Ok(state.always_do("agent is downed").reset(1.0, "agent is downed"));
        }
        return Ok(state.never_do("agent is downed"));
    }
    let percent_downed = ctx.world.percent_agents_downed()?;
    if percent_downed <= 0.0 {
        return Ok(state);
    }
    if *ctx.category == TaskCategory::Doctoring {
        return Ok(state.add(percent_downed, "other agents downed"));
    }
    if ctx.category.is_crafting_family() || *ctx.category == TaskCategory::Research {
        return Ok(state.never_do("other agents downed"));
    }
    Ok(state)
}

pub(crate) fn consider_building_immunity(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let fighting_disease = match ctx.agent.building_immunity() {
        Ok(fighting) => fighting,
        Err(err) => {
            tracing::warn!(
                target: "priority",
                agent = %ctx.agent_id,
                error = %err,
                "could not read immunity state"
            );
            return Ok(state);
        }
    };
    if !fighting_disease {
        return Ok(state);
    }
    match ctx.category {
        TaskCategory::Bedrest => Ok(state.add(0.4, "building immunity")),
        TaskCategory::Patient => Ok(state),
        _ => Ok(state.add(-0.2, "building immunity")),
    }
}

// --- overrides and policy ------------------------------------------------

/// Idle agents take whatever is on offer.
pub(crate) fn consider_boredom(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let idle = ctx.agent.is_idle()?;
    Ok(state.always_do_if(idle, "bored"))
}

/// Agents prefer to finish what they started: force-enabled and multiplied
/// up. Must run before the treatment caps so the cap sees the boosted
/// value.
pub(crate) fn consider_completing_task(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.agent.current_task()?.as_ref() == Some(ctx.category) {
        return Ok(state
            .always_do("currently doing this")
            .multiply(1.8, "currently doing this"));
    }
    Ok(state)
}

pub(crate) fn consider_anyone_else_doing(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.world.others_assigned(ctx.agent_id, ctx.category)? {
        return Ok(state);
    }
    Ok(state.always_do("no one else is doing this"))
}

pub(crate) fn consider_hunting_weapon(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.settings.breakers.hunting_weapon.is_open()
        || *ctx.category != TaskCategory::Hunting
    {
        return Ok(state);
    }
    let Some(has_weapon) = breaker_guard(
        ctx,
        &ctx.settings.breakers.hunting_weapon,
        "hunting_weapon",
        ctx.agent.has_hunting_weapon(),
    ) else {
        return Ok(state);
    };
    Ok(state.never_do_if(!has_weapon, "no hunting weapon"))
}

pub(crate) fn consider_brawlers_not_hunting(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if ctx.settings.breakers.brawlers_not_hunting.is_open()
        || *ctx.category != TaskCategory::Hunting
    {
        return Ok(state);
    }
    let Some(brawler) = breaker_guard(
        ctx,
        &ctx.settings.breakers.brawlers_not_hunting,
        "brawlers_not_hunting",
        ctx.agent.is_brawler(),
    ) else {
        return Ok(state);
    };
    Ok(state.never_do_if(brawler, "brawler"))
}

pub(crate) fn consider_home_area(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let in_home_area = ctx.agent.in_home_area()?;
    Ok(state.never_do_if(!in_home_area, "not in home area"))
}

pub(crate) fn consider_colony_policy(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    let offset = ctx.policy.offset(ctx.category);
    Ok(state.add(offset, "colony policy"))
}

pub(crate) fn consider_raw_food(
    state: ScoreState,
    ctx: &EvalContext<'_>,
) -> Result<ScoreState, SignalError> {
    if *ctx.category != TaskCategory::Cooking {
        return Ok(state);
    }
    let thoughts = ctx.agent.mood_thoughts()?;
    if thoughts.iter().any(|thought| thought.name == "ate_raw_food") && state.value() < 0.6 {
        return Ok(state.reset(0.6, "ate raw food"));
    }
    Ok(state)
}
