//! Progress events emitted while solving.

/// A progress event.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveEvent {
    /// A generation of a VRP run finished.
    GenerationCompleted {
        /// Run number, from 0.
        instance: usize,
        /// Generation number, from 1.
        generation: usize,
        /// Lowest memoized fitness in the new population.
        best_fitness: f64,
    },
    /// A VRP run finished.
    InstanceCompleted {
        /// Run number, from 0.
        instance: usize,
        /// Fitness of the run's best chromosome.
        fitness: f64,
        /// Number of routes in the run's best decoding.
        routes: usize,
    },
    /// The single-tour search finished.
    TourCompleted {
        /// Cyclic cost of the tour.
        cost: f64,
    },
}

/// Receives progress events.
///
/// Observers may be called from several threads when VRP runs execute in
/// parallel. Closures taking `&SolveEvent` implement this trait.
pub trait SolveObserver: Sync {
    /// Handles one event.
    fn on_event(&self, event: &SolveEvent);
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {
    fn on_event(&self, _event: &SolveEvent) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn on_event(&self, event: &SolveEvent) {
        match event {
            SolveEvent::GenerationCompleted {
                instance,
                generation,
                best_fitness,
            } => tracing::debug!(instance, generation, best_fitness, "generation completed"),
            SolveEvent::InstanceCompleted {
                instance,
                fitness,
                routes,
            } => tracing::debug!(instance, fitness, routes, "instance completed"),
            SolveEvent::TourCompleted { cost } => tracing::debug!(cost, "tour completed"),
        }
    }
}

impl<F> SolveObserver for F
where
    F: Fn(&SolveEvent) + Sync,
{
    fn on_event(&self, event: &SolveEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_observer() {
        let seen = Mutex::new(Vec::new());
        let observer = |e: &SolveEvent| seen.lock().expect("lock").push(e.clone());
        observer.on_event(&SolveEvent::TourCompleted { cost: 1.5 });
        assert_eq!(
            seen.into_inner().expect("lock"),
            vec![SolveEvent::TourCompleted { cost: 1.5 }]
        );
    }

    #[test]
    fn test_builtin_observers_accept_events() {
        let event = SolveEvent::InstanceCompleted {
            instance: 0,
            fitness: 3.0,
            routes: 1,
        };
        NoopObserver.on_event(&event);
        TracingObserver.on_event(&event);
    }
}
