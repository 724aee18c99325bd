use super::*;

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).unwrap();

    let result = pool.execute(|| {
        let (a, b) = join(|| (0..100).sum::<usize>(), || (100..200).sum::<usize>());
        a + b
    });

    assert_eq!(pool.num_threads(), 2);
    assert_eq!(result, Ok((0..200).sum::<usize>()));
}

#[test]
fn can_report_panic_in_worker_as_error() {
    let pool = ThreadPool::new(2).unwrap();

    let result = pool.execute(|| {
        let (a, _) = join(|| 1, || -> usize { panic!("worker failure") });
        a
    });

    assert_eq!(result, Err("parallel execution has failed: worker failure".into()));
}
