use super::*;

parameterized_test! {can_compute_log2_up, (n, expected), {
    assert_eq!(log2_up(n), expected);
}}

can_compute_log2_up! {
    case_01: (0, 0),
    case_02: (1, 0),
    case_03: (2, 1),
    case_04: (3, 2),
    case_05: (4, 2),
    case_06: (5, 3),
    case_07: (1024, 10),
    case_08: (1025, 11),
}

#[test]
fn can_fill_identity() {
    let mut indices = vec![7; 5];

    fill_identity(&mut indices);

    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}
