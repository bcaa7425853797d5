#[cfg(test)]
mod tests {
    use crate::battle::completion::Completion;
    use crate::battle::selectors::{PlayerSelector, Selector};
    use crate::battle::state::{BattleInfo, SelectorEvent};
    use crate::battle::tests::common::{HostCall, RecordingHost, TestActorBuilder};
    use crate::pokemon::Actor;
    use crate::teams::BattleTeam;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{BattleOutcome, Team};

    fn roster(hps: &[u16]) -> Vec<Actor> {
        hps.iter()
            .enumerate()
            .map(|(i, hp)| {
                TestActorBuilder::new(&format!("Mon{}", i), 20)
                    .with_hp(*hp)
                    .build()
            })
            .collect()
    }

    fn battle_where(team: Team, hps: &[u16]) -> BattleInfo {
        let healthy = roster(&[30]);
        match team {
            Team::Player => BattleInfo::new(
                BattleTeam::wild(roster(hps)),
                BattleTeam::trainer("Lass", healthy),
            ),
            Team::Opponent => BattleInfo::new(
                BattleTeam::wild(healthy),
                BattleTeam::trainer("Lass", roster(hps)),
            ),
        }
    }

    #[rstest]
    #[case(Team::Player, &[0, 12])]
    #[case(Team::Player, &[0, 0, 1])]
    #[case(Team::Opponent, &[0, 5])]
    fn test_survivors_mean_switch_is_offered(#[case] team: Team, #[case] hps: &[u16]) {
        // Arrange
        let battle_info = battle_where(team, hps);
        let mut host = RecordingHost::new();
        let mut selector = PlayerSelector::default();
        let (on_complete, slot) = Completion::with_slot("knockout");

        // Act
        selector
            .after_knockout(&battle_info, team, &mut host, on_complete)
            .unwrap();

        // Assert
        assert_eq!(host.calls, vec![HostCall::OfferSwitch(team)]);
        assert_eq!(
            host.count(|call| matches!(call, HostCall::StopBattle(_))),
            0
        );

        // The switching flow owns completion.
        assert!(!slot.is_filled());
        host.pending_switch.take().unwrap().complete(());
        assert_eq!(slot.times_fired(), 1);
    }

    #[rstest]
    #[case(Team::Player, &[0], BattleOutcome::OpponentVictory)]
    #[case(Team::Player, &[0, 0, 0], BattleOutcome::OpponentVictory)]
    #[case(Team::Opponent, &[0], BattleOutcome::PlayerVictory)]
    #[case(Team::Opponent, &[0, 0], BattleOutcome::PlayerVictory)]
    fn test_wiped_team_stops_battle_once(
        #[case] team: Team,
        #[case] hps: &[u16],
        #[case] expected: BattleOutcome,
    ) {
        // Arrange
        let battle_info = battle_where(team, hps);
        let mut host = RecordingHost::new();
        let mut selector = PlayerSelector::default();
        let (on_complete, slot) = Completion::with_slot("knockout");

        // Act
        selector
            .after_knockout(&battle_info, team, &mut host, on_complete)
            .unwrap();

        // Assert
        assert_eq!(host.calls, vec![HostCall::StopBattle(expected)]);
        assert!(host.pending_switch.is_none());
        assert_eq!(slot.times_fired(), 0);
        assert_eq!(
            selector.events().events(),
            &[SelectorEvent::BattleStopped { outcome: expected }]
        );
    }
}
