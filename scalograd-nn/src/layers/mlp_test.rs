use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_structure() {
    let mut rng = StdRng::seed_from_u64(3);
    let mlp = Mlp::with_rng(2, &[16, 16, 1], &mut rng).unwrap();
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.num_inputs(), 2);
    assert_eq!(mlp.num_outputs(), 1);
    // (2+1)*16 + (16+1)*16 + (16+1)*1
    assert_eq!(mlp.num_parameters(), 48 + 272 + 17);

    let non_linear: Vec<bool> = mlp
        .layers()
        .iter()
        .map(|l| l.neurons()[0].is_non_linear())
        .collect();
    assert_eq!(non_linear, vec![true, true, false]);
}

#[test]
fn test_mlp_forward_and_backward_reach_every_parameter() {
    let mut rng = StdRng::seed_from_u64(11);
    let mlp = Mlp::with_rng(3, &[4, 2], &mut rng).unwrap();
    let out = mlp.predict(&[0.5, -0.25, 1.0]).unwrap();
    assert_eq!(out.len(), 2);

    let total = &out[0] + &out[1];
    total.backward();
    // Output-layer biases always receive gradient 1 from a sum.
    for neuron in mlp.layers()[1].neurons() {
        assert_eq!(neuron.bias().grad(), 1.0);
    }

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_mlp_invalid_architectures() {
    assert!(matches!(
        Mlp::new(0, &[1]),
        Err(ScalogradError::InvalidArchitecture(_))
    ));
    assert!(matches!(
        Mlp::new(2, &[]),
        Err(ScalogradError::InvalidArchitecture(_))
    ));
    assert!(matches!(
        Mlp::new(2, &[3, 0, 1]),
        Err(ScalogradError::InvalidArchitecture(_))
    ));
}

#[test]
fn test_mlp_rejects_wrong_input_size() {
    let mlp = Mlp::new(2, &[1]).unwrap();
    assert_eq!(
        mlp.predict(&[1.0]).unwrap_err(),
        ScalogradError::InputSizeMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_mlp_display() {
    let mlp = Mlp::new(1, &[2, 1]).unwrap();
    assert_eq!(
        mlp.to_string(),
        "Mlp([Layer([ReLUNeuron(1),ReLUNeuron(1)]),Layer([LinearNeuron(2)])])"
    );
}
