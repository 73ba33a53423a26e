// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use redoubt_stream::consts::BLOCK_SIZE;
use redoubt_stream::{ChaCha20, ChaCha20Core, KeyMaterial, chacha20_core, increment_le};

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        proptest::collection::vec(any::<u8>(), 16),
        proptest::collection::vec(any::<u8>(), 32),
    ]
}

proptest! {
    #[test]
    fn encrypt_then_decrypt_restores_message(
        key in key_strategy(),
        nonce in any::<[u8; 8]>(),
        message in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut ciphertext = vec![0u8; message.len()];
        ChaCha20::new(&key, &nonce)
            .expect("Failed to new(..)")
            .cipher(&message, &mut ciphertext)
            .expect("Failed to cipher(..)");

        let mut plaintext = vec![0u8; message.len()];
        ChaCha20::new(&key, &nonce)
            .expect("Failed to new(..)")
            .cipher(&ciphertext, &mut plaintext)
            .expect("Failed to cipher(..)");

        prop_assert_eq!(plaintext, message);
    }

    #[test]
    fn split_calls_match_single_call(
        key in key_strategy(),
        nonce in any::<[u8; 16]>(),
        counter_len in 1usize..=16,
        message in proptest::collection::vec(any::<u8>(), 0..400),
        split in any::<proptest::sample::Index>(),
    ) {
        let at = split.index(message.len() + 1);

        let mut whole = vec![0u8; message.len()];
        ChaCha20::with_counter(&key, &nonce, counter_len)
            .expect("Failed to with_counter(..)")
            .cipher(&message, &mut whole)
            .expect("Failed to cipher(..)");

        let mut cipher = ChaCha20::with_counter(&key, &nonce, counter_len)
            .expect("Failed to with_counter(..)");
        let mut parts = vec![0u8; message.len()];
        let (head, tail) = parts.split_at_mut(at);
        cipher.cipher(&message[..at], head).expect("Failed to cipher(..)");
        cipher.cipher(&message[at..], tail).expect("Failed to cipher(..)");

        prop_assert_eq!(whole, parts);
    }

    #[test]
    fn nth_block_uses_counter_after_n_minus_one_increments(
        key in key_strategy(),
        nonce in any::<[u8; 16]>(),
        counter_len in 1usize..=16,
        n in 1usize..40,
    ) {
        let mut core = ChaCha20Core::with_counter(&key, &nonce, counter_len)
            .expect("Failed to with_counter(..)");
        let mut block = [0u8; BLOCK_SIZE];
        for _ in 0..n {
            core.next_block(&mut block);
        }

        let mut counter = nonce;
        for _ in 0..n - 1 {
            increment_le(&mut counter[..counter_len]);
        }
        let material = KeyMaterial::from_slice(&key).expect("Failed to from_slice(..)");
        let mut expected = [0u8; BLOCK_SIZE];
        chacha20_core(
            material.key0(),
            material.key1(),
            &counter,
            material.constant(),
            &mut expected,
        );

        prop_assert_eq!(block, expected);
        prop_assert_eq!(&nonce[counter_len..], &core.nonce_block()[counter_len..]);
    }

    #[test]
    fn apply_preserves_length_and_tracks_leftovers(
        key in key_strategy(),
        nonce in any::<[u8; 8]>(),
        len in 0usize..1024,
    ) {
        let mut data = vec![0u8; len];
        let mut cipher = ChaCha20::new(&key, &nonce).expect("Failed to new(..)");
        cipher.apply_keystream(&mut data);

        prop_assert_eq!(data.len(), len);
        prop_assert_eq!(cipher.buffered(), (BLOCK_SIZE - len % BLOCK_SIZE) % BLOCK_SIZE);
    }

    #[test]
    fn invalid_key_lengths_never_construct(len in 0usize..100) {
        prop_assume!(len != 16 && len != 32);
        let key = vec![0u8; len];

        prop_assert!(ChaCha20::new(&key, &[0u8; 8]).is_err());
        prop_assert!(ChaCha20::with_counter(&key, &[0u8; 16], 8).is_err());
    }
}
