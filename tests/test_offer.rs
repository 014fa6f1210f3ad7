use mesos_es_resources::core::offer::{select_one_port, select_ports, select_two_ports, Offer};
use mesos_es_resources::core::resource::{Range, Resource};
use mesos_es_resources::core::resources::{cpus, mem, port_range, single_port_range};

#[test]
fn test_two_ports_from_single_port_range() {
    let offered = vec![single_port_range(9200)];
    assert_eq!(vec![9200], select_two_ports(&offered));
}

#[test]
fn test_two_ports_from_wide_range() {
    let offered = vec![port_range(9200, 9300)];
    assert_eq!(vec![9200, 9201], select_two_ports(&offered));
}

#[test]
fn test_two_ports_across_resources() {
    let offered = vec![single_port_range(9200), port_range(9300, 9400)];
    assert_eq!(vec![9200, 9300], select_two_ports(&offered));
}

#[test]
fn test_two_ports_across_ranges_of_one_resource() {
    let offered = vec![Resource::ranges(
        "ports",
        vec![Range::new(9200, 9200), Range::new(9300, 9300)],
    )];
    assert_eq!(vec![9200, 9300], select_two_ports(&offered));
}

#[test]
fn test_no_range_resources_selects_nothing() {
    let offered = vec![cpus(1.0), mem(1024.0)];
    assert_eq!(Vec::<u64>::new(), select_one_port(&offered));
    assert_eq!(Vec::<u64>::new(), select_two_ports(&offered));
    assert_eq!(Vec::<u64>::new(), select_one_port(&[]));
}

#[test]
fn test_one_port_takes_lowest_begin_of_first_range() {
    let offered = vec![cpus(1.0), port_range(31000, 32000), single_port_range(9200)];
    assert_eq!(vec![31000], select_one_port(&offered));
}

#[test]
fn test_any_range_resource_is_a_port_source() {
    let offered = vec![Resource::ranges("ephemeral_ports", vec![Range::new(40000, 40010)])];
    assert_eq!(vec![40000, 40001], select_two_ports(&offered));
}

#[test]
fn test_overlapping_ranges_are_not_deduplicated() {
    let offered = vec![single_port_range(9200), single_port_range(9200)];
    assert_eq!(vec![9200, 9200], select_two_ports(&offered));
}

#[test]
fn test_empty_range_list_contributes_nothing() {
    let offered = vec![Resource::ranges("ports", vec![]), single_port_range(9300)];
    assert_eq!(vec![9300], select_two_ports(&offered));
}

#[test]
fn test_selection_leaves_offer_untouched() {
    let offered = vec![
        mem(256.0),
        port_range(9300, 9400),
        single_port_range(9200),
        cpus(0.5),
    ];
    let before = offered.clone();

    select_one_port(&offered);
    select_two_ports(&offered);

    assert_eq!(before, offered);
}

#[test]
fn test_larger_counts_use_same_policy() {
    let offered = vec![port_range(9200, 9300), single_port_range(9400), port_range(9500, 9501)];
    assert_eq!(vec![9200, 9201, 9400, 9500], select_ports(&offered, 4));
    assert_eq!(vec![9200, 9201, 9400, 9500, 9501], select_ports(&offered, 10));
    assert_eq!(Vec::<u64>::new(), select_ports(&offered, 0));
}

#[test]
fn test_offer_select_ports() {
    let offer = Offer::new(
        "offer-1".to_string(),
        "agent-1".to_string(),
        vec![cpus(4.0), single_port_range(9201), single_port_range(9301)],
    );
    assert_eq!(vec![9201, 9301], offer.select_ports(2));
    assert_eq!(vec![9201], offer.select_ports(1));
}

#[test]
fn test_unbounded_count_returns_all_offered_ports() {
    let offered = vec![single_port_range(9200), port_range(9300, 9400)];
    assert_eq!(vec![9200, 9300, 9301], select_ports(&offered, usize::MAX));
    assert_eq!(Vec::<u64>::new(), select_ports(&[cpus(1.0)], usize::MAX));
}
