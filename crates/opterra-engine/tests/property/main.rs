//! Property tests for the engine's documented invariants.

mod health_properties;
mod leak_properties;
mod repair_properties;
mod stress_properties;

use opterra_core::models::{
    AnodeStatus, FilterStatus, GasLineSize, LeakSource, Location, SaltStatus, SoftenerContext,
    TempSetting, UsageType, VentType,
};
use opterra_core::{FuelType, ForensicInputs};
use proptest::prelude::*;

pub fn arb_fuel_type() -> impl Strategy<Value = FuelType> {
    prop_oneof![
        Just(FuelType::Gas),
        Just(FuelType::Electric),
        Just(FuelType::Hybrid),
        Just(FuelType::TanklessGas),
        Just(FuelType::TanklessElectric),
    ]
}

pub fn arb_location() -> impl Strategy<Value = Location> {
    prop_oneof![
        Just(Location::Attic),
        Just(Location::Garage),
        Just(Location::Basement),
        Just(Location::MainLiving),
        Just(Location::UtilityCloset),
        Just(Location::Crawlspace),
        Just(Location::Exterior),
        Just(Location::UpperFloor),
    ]
}

pub fn arb_leak_source() -> impl Strategy<Value = Option<LeakSource>> {
    proptest::option::of(prop_oneof![
        Just(LeakSource::TankBody),
        Just(LeakSource::FittingValve),
        Just(LeakSource::DrainValve),
        Just(LeakSource::ReliefValve),
    ])
}

fn arb_filter() -> impl Strategy<Value = Option<FilterStatus>> {
    proptest::option::of(prop_oneof![
        Just(FilterStatus::Clean),
        Just(FilterStatus::Dirty),
        Just(FilterStatus::Clogged),
    ])
}

fn arb_softener() -> impl Strategy<Value = Option<SoftenerContext>> {
    proptest::option::of(
        prop_oneof![
            Just(SaltStatus::Ok),
            Just(SaltStatus::Low),
            Just(SaltStatus::Empty),
            Just(SaltStatus::Unknown),
        ]
        .prop_map(|salt_status| SoftenerContext {
            salt_status,
            ..SoftenerContext::default()
        }),
    )
}

/// Site, usage and condition fields.
#[allow(clippy::type_complexity)]
fn arb_condition(
) -> impl Strategy<Value = (Location, bool, TempSetting, UsageType, f64, Option<AnodeStatus>)> {
    (
        arb_location(),
        any::<bool>(),
        prop_oneof![
            Just(TempSetting::Low),
            Just(TempSetting::Normal),
            Just(TempSetting::High),
        ],
        prop_oneof![
            Just(UsageType::Light),
            Just(UsageType::Normal),
            Just(UsageType::Heavy),
        ],
        20.0f64..90.0,
        proptest::option::of(prop_oneof![
            Just(AnodeStatus::Good),
            Just(AnodeStatus::Worn),
            Just(AnodeStatus::Depleted),
        ]),
    )
}

/// Tankless and hybrid equipment fields.
#[allow(clippy::type_complexity)]
fn arb_equipment() -> impl Strategy<
    Value = (
        Option<VentType>,
        Option<GasLineSize>,
        Option<FilterStatus>,
        Option<FilterStatus>,
        Option<bool>,
        Option<bool>,
    ),
> {
    (
        proptest::option::of(prop_oneof![
            Just(VentType::Atmospheric),
            Just(VentType::PowerVent),
            Just(VentType::DirectVent),
        ]),
        proptest::option::of(prop_oneof![
            Just(GasLineSize::HalfInch),
            Just(GasLineSize::ThreeQuarterInch),
            Just(GasLineSize::OneInch),
        ]),
        arb_filter(),
        arb_filter(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
}

prop_compose! {
    pub fn arb_inputs()(
        fuel_type in arb_fuel_type(),
        calendar_age in 0.0f64..30.0,
        house_psi in 20.0f64..150.0,
        hardness in proptest::option::of(0.0f64..35.0),
        plumbing in any::<(bool, bool, bool)>(),
        extras in any::<(bool, bool, bool)>(),
        people_count in 1u32..10,
        history in (
            proptest::option::of(0.0f64..15.0),
            proptest::option::of(0.0f64..15.0),
            proptest::option::of(0.0f64..15.0),
        ),
        leak in (any::<bool>(), arb_leak_source(), 0u32..6),
        condition in arb_condition(),
        equipment in arb_equipment(),
        softener in arb_softener(),
    ) -> ForensicInputs {
        let (has_prv, has_exp_tank, is_closed_loop) = plumbing;
        let (has_softener, has_circ_pump, visual_rust) = extras;
        let (last_flush, last_anode, last_descale) = history;
        let (is_leaking, leak_source, error_code_count) = leak;
        let (location, is_finished_area, temp_setting, usage_type, tank_capacity, anode_status) =
            condition;
        let (
            vent_type,
            gas_line_size,
            inlet_filter_status,
            air_filter_status,
            has_isolation_valves,
            condensate_clear,
        ) = equipment;
        ForensicInputs {
            fuel_type,
            calendar_age,
            tank_capacity,
            location,
            is_finished_area,
            house_psi,
            has_prv,
            has_exp_tank,
            is_closed_loop,
            measured_hardness: hardness,
            has_softener,
            softener,
            temp_setting,
            people_count,
            usage_type,
            has_circ_pump,
            last_flush_years_ago: last_flush,
            last_anode_replace_years_ago: last_anode,
            last_descale_years_ago: last_descale,
            is_leaking,
            leak_source,
            visual_rust,
            anode_status,
            vent_type,
            gas_line_size,
            inlet_filter_status,
            error_code_count,
            has_isolation_valves,
            air_filter_status,
            condensate_clear,
            ..Default::default()
        }
    }
}
