// Integration tests for the sorting automata

use algostep::automaton::{run_to_end, Automaton, View};
use algostep::model::array::ArraySource;
use algostep::sorting::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};

const STEP_LIMIT: usize = 1_000_000;

fn every_sort(source: &ArraySource) -> Vec<Box<dyn Automaton>> {
    vec![
        Box::new(BubbleSort::new(source.clone())),
        Box::new(SelectionSort::new(source.clone())),
        Box::new(InsertionSort::new(source.clone())),
        Box::new(MergeSort::new(source.clone())),
        Box::new(QuickSort::new(source.clone())),
        Box::new(HeapSort::new(source.clone())),
    ]
}

fn array_values(automaton: &dyn Automaton) -> Vec<i64> {
    match automaton.view() {
        View::Array(view) => view.values.to_vec(),
        _ => panic!("{} is not an array automaton", automaton.name()),
    }
}

#[test]
fn test_seeded_sorts_produce_sorted_permutation() {
    let source = ArraySource::Random {
        len: 60,
        min: 10,
        max: 100,
        seed: Some(7),
    };
    let mut expected = source.generate();
    expected.sort();

    for mut sorter in every_sort(&source) {
        run_to_end(sorter.as_mut(), STEP_LIMIT);
        assert!(sorter.is_done(), "{} did not finish", sorter.name());
        assert_eq!(array_values(sorter.as_ref()), expected, "{}", sorter.name());
        assert!(!sorter.is_running());
    }
}

#[test]
fn test_sorts_handle_degenerate_inputs() {
    let inputs = [
        vec![],
        vec![42],
        vec![5, 5, 5, 5, 5],
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
        vec![-3, 7, -3, 0, 12, 7],
    ];
    for input in inputs {
        let mut expected = input.clone();
        expected.sort();
        for mut sorter in every_sort(&ArraySource::Fixed(input.clone())) {
            run_to_end(sorter.as_mut(), STEP_LIMIT);
            assert!(sorter.is_done(), "{} on {:?}", sorter.name(), input);
            assert_eq!(array_values(sorter.as_ref()), expected, "{} on {:?}", sorter.name(), input);
        }
    }
}

#[test]
fn test_quadratic_sorts_compare_every_pair() {
    let source = ArraySource::Random {
        len: 40,
        min: 1,
        max: 1000,
        seed: Some(3),
    };
    let pairs = 40 * 39 / 2;

    let mut bubble = BubbleSort::new(source.clone());
    run_to_end(&mut bubble, STEP_LIMIT);
    assert_eq!(bubble.array().stats().comparisons, pairs);

    let mut selection = SelectionSort::new(source);
    run_to_end(&mut selection, STEP_LIMIT);
    assert_eq!(selection.array().stats().comparisons, pairs);
    assert!(selection.array().stats().swaps < 40);
}

#[test]
fn test_n_log_n_sorts_stay_within_bound() {
    let n = 256;
    let log_n = 8; // ceil(log2(256))
    for seed in [5, 6, 7] {
        let source = ArraySource::Random {
            len: n,
            min: 1,
            max: 10_000,
            seed: Some(seed),
        };

        // Each merge pass compares at most once per placed element
        let mut merge = MergeSort::new(source.clone());
        run_to_end(&mut merge, STEP_LIMIT);
        let merge_comparisons = merge.array().stats().comparisons;
        assert!(merge.array().is_sorted());
        assert!(merge_comparisons <= n * log_n, "merge: {}", merge_comparisons);

        // Two child comparisons per sift level, n/2 build roots plus n extractions
        let mut heap = HeapSort::new(source);
        run_to_end(&mut heap, STEP_LIMIT);
        let heap_comparisons = heap.array().stats().comparisons;
        assert!(heap.array().is_sorted());
        assert!(heap_comparisons <= 2 * n * log_n + 2 * n, "heap: {}", heap_comparisons);

        // Far below the quadratic n(n-1)/2 that bubble sort pays
        assert!(heap_comparisons < n * (n - 1) / 4);
    }
}

#[test]
fn test_reset_regenerates_the_same_seeded_input() {
    let source = ArraySource::Random {
        len: 25,
        min: 10,
        max: 100,
        seed: Some(99),
    };
    let initial = source.generate();

    for mut sorter in every_sort(&source) {
        assert_eq!(array_values(sorter.as_ref()), initial);
        run_to_end(sorter.as_mut(), 30);
        sorter.reset();
        assert_eq!(array_values(sorter.as_ref()), initial, "{}", sorter.name());
        assert_eq!(sorter.steps_taken(), 0);
        assert!(!sorter.is_done());
        sorter.reset();
        assert_eq!(array_values(sorter.as_ref()), initial);
    }
}

#[test]
fn test_paused_sort_ignores_step() {
    let mut sorter = QuickSort::new(ArraySource::Fixed(vec![3, 1, 2]));
    sorter.step();
    assert_eq!(sorter.steps_taken(), 0);
    assert_eq!(sorter.array().values(), &[3, 1, 2]);
}

#[test]
fn test_finished_sort_marks_whole_array_sorted() {
    let mut sorter = HeapSort::new(ArraySource::Fixed(vec![4, 10, 3, 5, 1]));
    run_to_end(&mut sorter, STEP_LIMIT);
    match sorter.view() {
        View::Array(view) => {
            assert_eq!(view.sorted, 0..5);
            assert!(view.marks.is_empty());
        }
        _ => panic!("expected an array view"),
    }
}
