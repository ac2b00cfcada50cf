//! Meshsim - mesh-current circuit simulator
//!
//! Runs a built-in demo circuit for a number of fixed time steps and prints
//! one state snapshot per step.
//!
//! # Usage
//!
//! ```bash
//! meshsim --circuit rl --steps 50 --time-step 0.1
//! ```

use clap::{Parser, ValueEnum};
use meshsim::{
    circuit::validate_circuit, Capacitor, Circuit, Component, CurrentSource, Inductor, Mesh,
    Resistor, Result, Waveform, DEFAULT_TIME_STEP,
};

/// Built-in demonstration circuits.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Series R-L charging from a 1 A DC source
    Rl,
    /// Series R-C charging from a 1 A DC source
    Rc,
    /// L-C tank oscillating from a 1 V initial capacitor charge
    Lc,
}

/// Mesh-current circuit simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Demo circuit to simulate
    #[arg(short, long, value_enum, default_value_t = Demo::Rl)]
    circuit: Demo,

    /// Number of simulation steps
    #[arg(short, long, default_value_t = 100)]
    steps: usize,

    /// Fixed time step in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIME_STEP)]
    time_step: f64,
}

fn build_demo(demo: Demo, dt: f64) -> Circuit {
    let mut circuit = Circuit::new(dt);
    match demo {
        Demo::Rl => {
            circuit.add_component(CurrentSource::new(
                Mesh::Loop(0),
                Mesh::Ground,
                Waveform::dc(1.0),
            ));
            circuit.add_component(Resistor::new(Mesh::Loop(0), Mesh::Loop(1), 10.0));
            circuit.add_component(Inductor::new(Mesh::Loop(1), Mesh::Ground, 1.0));
        }
        Demo::Rc => {
            circuit.add_component(CurrentSource::new(
                Mesh::Loop(0),
                Mesh::Ground,
                Waveform::dc(1.0),
            ));
            circuit.add_component(Resistor::new(Mesh::Loop(0), Mesh::Loop(1), 10.0));
            circuit.add_component(Capacitor::new(Mesh::Loop(1), Mesh::Ground, 1.0));
        }
        Demo::Lc => {
            circuit.add_component(CurrentSource::new(
                Mesh::Loop(1),
                Mesh::Ground,
                Waveform::dc(0.0),
            ));
            circuit.add_component(Inductor::new(Mesh::Loop(0), Mesh::Loop(1), 1.0));
            circuit.add_component(Capacitor::with_voltage(
                Mesh::Loop(0),
                Mesh::Loop(1),
                1.0,
                1.0,
            ));
        }
    }
    circuit
}

fn capacitor_voltages(circuit: &Circuit) -> Vec<f64> {
    circuit
        .components()
        .iter()
        .filter_map(|c| match c {
            Component::Capacitor(cap) => Some(cap.voltage()),
            _ => None,
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut circuit = build_demo(args.circuit, args.time_step);
    validate_circuit(&circuit)?;
    circuit.initialize_state()?;

    for _ in 0..args.steps {
        circuit.step()?;
        let state = circuit.state().expect("state initialized above");
        print!("t={:.6}", state.time());
        for (mesh, current) in state.mesh_currents().iter().enumerate() {
            print!(" I{}={:+.6}", mesh, current);
        }
        for (idx, voltage) in capacitor_voltages(&circuit).iter().enumerate() {
            print!(" V{}={:+.6}", idx, voltage);
        }
        println!();
    }

    Ok(())
}
