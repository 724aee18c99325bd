#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::ThreadPool;
pub use self::actual::join;

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    extern crate rayon;
    use self::rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
    use crate::utils::{GenericError, GenericResult};
    use std::panic::{AssertUnwindSafe, catch_unwind};

    /// Represents a thread pool wrapper.
    pub struct ThreadPool {
        inner: RayonThreadPool,
    }

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(num_threads: usize) -> GenericResult<Self> {
            ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .thread_name(|idx| format!("nds-worker-{idx}"))
                .build()
                .map(|inner| Self { inner })
                .map_err(|err| format!("cannot build a thread pool: {err}").into())
        }

        /// Returns amount of threads in the pool.
        pub fn num_threads(&self) -> usize {
            self.inner.current_num_threads()
        }

        /// Executes given operation on thread pool. A panic raised by any of the workers is
        /// reported as a single error instead of being propagated.
        pub fn execute<OP, R>(&self, op: OP) -> GenericResult<R>
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            catch_unwind(AssertUnwindSafe(|| self.inner.install(op))).map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|msg| msg.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown reason".to_string());

                GenericError::from(format!("parallel execution has failed: {reason}"))
            })
        }
    }

    /// Runs two closures potentially in parallel and returns both results.
    pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(oper_a, oper_b)
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    use crate::utils::GenericResult;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool;

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(_num_threads: usize) -> GenericResult<Self> {
            Ok(Self {})
        }

        /// Returns amount of threads in the pool.
        pub fn num_threads(&self) -> usize {
            1
        }

        /// Executes given operation on thread pool (dummy).
        pub fn execute<OP, R>(&self, op: OP) -> GenericResult<R>
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            Ok(op())
        }
    }

    /// Runs two closures sequentially.
    pub fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (oper_a(), oper_b())
    }
}
