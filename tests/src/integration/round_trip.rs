//! # Round-Trip Flows
//!
//! Builds requests and responses, encodes them under the shared secret, and
//! decodes them back through the public API of both crates.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use kinetic_codec::{
        build_request, build_response, decode, encode, OperationKind, PduCodecApi,
    };
    use kinetic_types::{
        BuildError, Command, CommandHeader, DecodeError, HmacKey, MessageType, StatusCode,
    };
    use rand::Rng;

    // =============================================================================
    // KNOWN ANSWERS
    // =============================================================================

    /// Test: NOOP request matches the published wire bytes
    #[test]
    fn test_noop_golden_vector() {
        let command = build_request(OperationKind::Noop, 1234, 1, None).unwrap();
        let pdu = encode(&command, DEMO_IDENTITY, &demo_key());

        assert_eq!(hex::encode(&pdu), NOOP_PDU_HEX);
    }

    /// Test: Published wire bytes decode to the expected NOOP
    #[test]
    fn test_decode_golden_vector() {
        let pdu = hex::decode(NOOP_PDU_HEX).unwrap();
        let command = decode(&pdu, &demo_key()).unwrap();

        assert_eq!(command.connection_id(), Some(1234));
        assert_eq!(command.effective_sequence(), 1);
        assert_eq!(command.known_message_type(), Some(MessageType::Noop));
        assert_eq!(command.cluster_version(), 0);
    }

    // =============================================================================
    // ROUND TRIPS
    // =============================================================================

    /// Test: decode(encode(build_request(..))) yields the built command
    #[test]
    fn test_randomized_request_round_trip() {
        let mut rng = rand::thread_rng();
        let key = demo_key();

        for _ in 0..200 {
            let connection_id: i64 = rng.gen();
            let sequence: u64 = rng.gen();
            let identity: i64 = rng.gen();
            let (kind, user_key) = if rng.gen_bool(0.5) {
                let len = rng.gen_range(0..64);
                let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                (OperationKind::Put, Some(bytes))
            } else {
                (OperationKind::Noop, None)
            };

            let command =
                build_request(kind, connection_id, sequence, user_key.as_deref()).unwrap();
            let decoded = decode(&encode(&command, identity, &key), &key).unwrap();

            assert_eq!(decoded, command);
            assert_eq!(decoded.key(), user_key.as_deref());
            assert_eq!(decoded.connection_id(), Some(connection_id));
        }
    }

    /// Test: Responses survive the codec with status and detail intact
    #[test]
    fn test_response_round_trip() {
        let response = build_response(
            OperationKind::Put,
            42,
            StatusCode::NoSpace,
            Some(b"device full"),
        );
        let decoded = decode(&encode(&response, DEMO_IDENTITY, &demo_key()), &demo_key()).unwrap();

        assert_eq!(decoded, response);
        assert_eq!(decoded.effective_sequence(), 42);
        assert_eq!(decoded.known_status_code(), Some(StatusCode::NoSpace));
        assert_eq!(decoded.error_message(), Some(&b"device full"[..]));
        assert!(!decoded.is_success());
    }

    /// Test: Service and free functions produce identical bytes
    #[test]
    fn test_service_matches_free_functions() {
        let service = inline_service();
        let command = service
            .build_request(OperationKind::Put, 9, 3, Some(b"key"))
            .unwrap();

        assert_eq!(
            service.encode(&command),
            encode(&command, DEMO_IDENTITY, &demo_key())
        );
    }

    // =============================================================================
    // COMMAND MODEL THROUGH THE WIRE
    // =============================================================================

    /// Test: Sequence fallback applies to decoded acknowledgements
    #[test]
    fn test_ack_only_response_sequence_fallback() {
        let ack_only = Command {
            header: Some(CommandHeader {
                sequence: Some(0),
                ack_sequence: Some(7),
                message_type: Some(MessageType::NoopResponse as i32),
                ..Default::default()
            }),
            ..Default::default()
        };
        let decoded = decode(&encode(&ack_only, DEMO_IDENTITY, &demo_key()), &demo_key()).unwrap();
        assert_eq!(decoded.effective_sequence(), 7);
    }

    /// Test: Out-of-range message types survive decoding but read as unset
    #[test]
    fn test_out_of_range_message_type_reads_as_unset() {
        let odd = Command {
            header: Some(CommandHeader {
                sequence: Some(5),
                message_type: Some(150),
                ..Default::default()
            }),
            ..Default::default()
        };
        let decoded = decode(&encode(&odd, DEMO_IDENTITY, &demo_key()), &demo_key()).unwrap();

        assert_eq!(decoded.header.as_ref().and_then(|h| h.message_type), Some(150));
        assert_eq!(decoded.message_type_or_none(), None);

        let summary = serde_json::to_value(decoded.summary()).unwrap();
        assert_eq!(summary["messageType"], serde_json::Value::Null);
        assert_eq!(summary["sequence"], 5);
    }

    // =============================================================================
    // FAILURES
    // =============================================================================

    /// Test: PUT without a key is rejected at build time
    #[test]
    fn test_put_requires_key() {
        assert!(matches!(
            build_request(OperationKind::Put, 1, 1, None),
            Err(BuildError::InvalidArgument(_))
        ));
    }

    /// Test: Random wrong secrets never authenticate
    #[test]
    fn test_random_wrong_keys_rejected() {
        let mut rng = rand::thread_rng();
        let pdu = hex::decode(NOOP_PDU_HEX).unwrap();

        for _ in 0..100 {
            let len = rng.gen_range(1..32);
            let mut secret: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            if secret == DEMO_SECRET.as_bytes() {
                secret.push(0);
            }
            assert_eq!(
                decode(&pdu, &HmacKey::new(secret)),
                Err(DecodeError::AuthenticationFailed)
            );
        }
    }
}
