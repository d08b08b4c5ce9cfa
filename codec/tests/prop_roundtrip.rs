use codec::{
    decode_message, ClientSendLocalUpdate, ClientUpdate, PeerId, PhotonBeam, PlayerSlot,
    ServerGameState, ServerSendInfo, ServerUpdateWorld, ShipRecord, TicketBytes, Vec2,
    VoiceChatData, VoiceBytes, WireMessage,
};
use proptest::prelude::*;
use wire::{DecodeOptions, MessageType};

fn finite() -> impl Strategy<Value = f32> + Clone {
    -1.0e6f32..1.0e6f32
}

fn vec2() -> impl Strategy<Value = Vec2> + Clone {
    (finite(), finite()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn slot() -> impl Strategy<Value = PlayerSlot> {
    (0usize..4).prop_filter_map("slot in range", PlayerSlot::new)
}

fn beam() -> impl Strategy<Value = PhotonBeam> + Clone {
    (any::<bool>(), finite(), vec2(), vec2()).prop_map(|(active, rotation, velocity, position)| {
        PhotonBeam {
            active,
            rotation,
            velocity,
            position,
        }
    })
}

fn ship() -> impl Strategy<Value = ShipRecord> + Clone {
    (
        (finite(), finite(), vec2(), vec2(), vec2()),
        prop::array::uniform4(any::<bool>()),
        prop::array::uniform4(any::<i32>()),
        prop::array::uniform7(beam()),
        (finite(), finite()),
    )
        .prop_map(
            |(
                (rotation, rotation_delta, acceleration, velocity, position),
                flags,
                cosmetics,
                photon_beams,
                (thruster_level, turn_speed),
            )| ShipRecord {
                rotation,
                rotation_delta,
                acceleration,
                velocity,
                position,
                exploding: flags[0],
                disabled: flags[1],
                forward_thrusters: flags[2],
                reverse_thrusters: flags[3],
                decoration: cosmetics[0],
                weapon: cosmetics[1],
                power: cosmetics[2],
                shield_strength: cosmetics[3],
                photon_beams,
                thruster_level,
                turn_speed,
            },
        )
}

fn game_state() -> impl Strategy<Value = ServerGameState> {
    prop_oneof![
        Just(ServerGameState::WaitingForPlayers),
        Just(ServerGameState::Active),
        Just(ServerGameState::Draw),
        Just(ServerGameState::Winner),
        Just(ServerGameState::Exiting),
    ]
}

fn world() -> impl Strategy<Value = ServerUpdateWorld> {
    (
        game_state(),
        any::<u32>(),
        prop::array::uniform4(any::<bool>()),
        prop::array::uniform4(any::<u32>()),
        prop::array::uniform4(ship()),
        prop::array::uniform4(any::<u64>()),
    )
        .prop_map(|(game_state, player_who_won, players_active, player_scores, ships, ids)| {
            ServerUpdateWorld {
                game_state,
                player_who_won,
                players_active,
                player_scores,
                ships,
                player_ids: ids.map(PeerId::new),
            }
        })
}

fn client_update() -> impl Strategy<Value = ClientUpdate> {
    (
        prop::array::uniform5(any::<bool>()),
        prop::array::uniform4(any::<i32>()),
        "[a-zA-Z0-9 _-]{0,63}",
        finite(),
        finite(),
    )
        .prop_map(|(controls, cosmetics, player_name, thruster_level, turn_speed)| ClientUpdate {
            fire: controls[0],
            turn_left: controls[1],
            turn_right: controls[2],
            forward_thrust: controls[3],
            reverse_thrust: controls[4],
            decoration: cosmetics[0],
            weapon: cosmetics[1],
            power: cosmetics[2],
            shield: cosmetics[3],
            player_name,
            thruster_level,
            turn_speed,
        })
}

proptest! {
    #[test]
    fn prop_world_roundtrip(world in world()) {
        let bytes = world.encode();
        prop_assert_eq!(bytes.len(), MessageType::ServerUpdateWorld.wire_size());
        prop_assert_eq!(ServerUpdateWorld::decode(&bytes).unwrap(), world);
    }

    #[test]
    fn prop_client_update_roundtrip(slot in slot(), update in client_update()) {
        let message = ClientSendLocalUpdate::new(slot, update);
        let bytes = message.encode();
        prop_assert_eq!(bytes.len(), 101);
        prop_assert_eq!(ClientSendLocalUpdate::decode(&bytes).unwrap(), message);
    }

    #[test]
    fn prop_server_name_never_changes_size(name in "\\PC{0,200}", id in any::<u64>()) {
        let info = ServerSendInfo {
            server_id: PeerId::new(id),
            anti_cheat_secure: true,
            server_name: name.clone(),
        };
        let bytes = info.encode();
        prop_assert_eq!(bytes.len(), 141);

        let decoded = ServerSendInfo::decode(&bytes).unwrap();
        prop_assert!(decoded.server_name.len() <= 127);
        prop_assert!(name.starts_with(&decoded.server_name));
    }

    #[test]
    fn prop_payloads_roundtrip(
        payload in prop::collection::vec(any::<u8>(), 0..=1024),
        sender in any::<u64>(),
    ) {
        let voice = VoiceChatData {
            payload: VoiceBytes::new(payload.clone()).unwrap(),
            sender_id: PeerId::new(sender),
        };
        let bytes = voice.encode();
        prop_assert_eq!(bytes.len(), 1040);
        let decoded = VoiceChatData::decode(&bytes).unwrap();
        prop_assert_eq!(decoded.payload.as_slice(), &payload[..]);

        prop_assert!(TicketBytes::new(payload).is_ok());
    }

    #[test]
    fn prop_float_bits_survive(bits in any::<u32>()) {
        let ship = ShipRecord {
            turn_speed: f32::from_bits(bits),
            ..ShipRecord::default()
        };
        let mut world = ServerUpdateWorld::new(ServerGameState::Active, 0);
        world.ships[0] = ship;

        let decoded = ServerUpdateWorld::decode(&world.encode()).unwrap();
        prop_assert_eq!(decoded.ships[0].turn_speed.to_bits(), bits);
    }

    #[test]
    fn prop_dispatch_never_panics(data in prop::collection::vec(any::<u8>(), 0..1100)) {
        let _ = decode_message(&data, &DecodeOptions::default());
        let _ = decode_message(&data, &DecodeOptions::lenient());
    }

    #[test]
    fn prop_dispatch_of_sized_garbage(type_index in 0usize..9, fill in any::<u8>()) {
        let message_type = MessageType::ALL[type_index];
        let mut buf = vec![fill; message_type.wire_size()];
        buf[..4].copy_from_slice(&message_type.raw().to_le_bytes());
        if let Ok(message) = decode_message(&buf, &DecodeOptions::lenient()) {
            prop_assert_eq!(message.message_type(), message_type);
            prop_assert_eq!(message.encode().len(), buf.len());
        }
    }
}
