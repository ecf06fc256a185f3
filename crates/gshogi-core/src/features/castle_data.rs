//! 囲いライブラリ（標準定義）
//!
//! 各エントリは (囲い名, 99 バイト局面エンコードの16進文字列)。
//! 盤上には囲いを構成する片側の駒と玉のみが置かれている。

/// 先手の囲い
pub(super) const BLACK_CASTLES: &[(&str, &str)] = &[
    (
        "left_mino",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00FF07FFFFFFFFFF000501FFFFFFFFFFFFFF000602FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "gold_fortress",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF000107FFFFFFFFFFFFFF000602FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "helmet",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF0006FFFFFFFFFFFF000107FFFFFFFFFFFFFF00FF02FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "crab",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FF07FFFFFFFFFFFFFF000106FFFFFFFFFF00FF07FFFFFFFFFFFFFF00FF02FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "bonanza",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF0007FFFFFFFFFFFF000106FFFFFFFFFFFFFF00FF02FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "snowroof",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000107FFFFFFFFFFFF0001FF06FFFFFFFFFF00FF07FFFFFFFFFFFFFF00FF02FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "silver_horns_snowroof",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFFFF0007FFFFFFFFFFFF0001FF06FFFFFFFFFF00FF07FFFFFFFFFFFFFF00FF02FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "right_king_1",
        "FFFFFFFFFF00FFFF03FFFFFFFF00FFFFFF04FFFFFFFFFF000206FFFFFFFFFFFF0001FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "right_king_2",
        "FFFFFFFF00FFFFFF03FFFFFFFF00FFFFFF04FFFFFFFFFF000206FFFFFFFFFFFF000107FFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "right_king_3",
        "FFFFFFFFFF00FFFF03FFFFFFFF00FFFFFF04FFFFFFFFFF0002FFFFFFFFFFFFFF000106FFFFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "central_house",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF0001FFFFFFFFFFFFFF0006FFFFFFFFFFFFFF0001FFFFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "nakahara",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFF00FF07FFFFFFFFFFFF00FF06FFFFFFFFFF00FF0701FFFFFFFFFFFF00FF02FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "duck",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FF07FFFFFFFFFFFF0001FFFFFFFFFFFFFF0006FFFFFFFFFFFFFF0001FFFFFFFFFFFFFF00FF07FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "paperweight",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FF07FFFFFFFFFFFFFF0007FFFFFFFFFFFF000206FFFFFFFFFFFFFF0001FFFFFFFFFFFF00FF03FF000000000000000000000000000000000000",
    ),
    (
        "truck",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF000107FFFFFFFFFFFF000107FFFFFFFFFFFF00FF06FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "boat_pawn",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FF07FFFFFFFFFFFFFF00FF07FFFFFFFFFF00FF0601FFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "daughter_inside_box",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000707FFFFFFFFFF00FF0601FFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "diamond",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000107FFFFFFFFFFFFFF000107FFFFFFFFFF00FF06FFFFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "strawberry",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF0006FFFFFFFFFFFF00FF0701FFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "yonenaga",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00FF07FFFFFFFFFFFF00010502FFFFFFFFFF00FF0603000000000000000000000000000000000000",
    ),
    (
        "elmo",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFF00FF0607FFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "elmo_gold",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF07FFFFFFFFFFFF0001FFFFFFFFFFFF00FF0607FFFFFFFFFFFF000502FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "silver_elephant_eye",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFF000601FFFFFFFFFFFF0002FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_elephant_eye",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFF000607FFFFFFFFFFFF0002FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "kushikatsu",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFF00FF0707FFFFFFFFFFFF000102FFFFFFFFFFFF000603000000000000000000000000000000000000",
    ),
    (
        "anaguma",
        "FFFFFFFFFFFF000306FFFFFFFFFFFF000102FFFFFFFFFFFF000707FFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "mino",
        "FFFFFFFFFF00FFFF03FFFFFFFFFFFF000602FFFFFFFFFFFF0001FFFFFFFFFFFFFF00FF07FFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "silver_crown",
        "FFFFFFFFFF00FFFF03FFFFFFFFFF000106FFFFFFFFFFFF000207FFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "wall",
        "FFFFFFFFFFFF00FF03FFFFFFFFFFFF00FF02FFFFFFFFFFFF0006FFFFFFFFFFFFFF000107FFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_mino",
        "FFFFFFFFFFFF00FF03FFFFFFFFFFFF000602FFFFFFFFFFFF0007FFFFFFFFFFFFFF0001FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "three_move",
        "FFFFFFFFFFFF00FF03FFFFFFFFFFFF00FF02FFFFFFFFFFFF000601FFFFFFFFFFFF0007FFFFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "rapid_castle",
        "FFFFFFFFFFFF00FF03FFFFFFFFFFFF000602FFFFFFFFFFFF000701FFFFFFFFFFFF00FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "flatfish",
        "FFFFFFFFFF00FFFF03FFFFFFFFFFFF000602FFFFFFFFFFFF0001FFFFFFFFFFFFFF00FF07FFFFFFFFFFFF00FF07FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_1",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00020701FFFFFFFFFFFF00FF06FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "millenium_2",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00020701FFFFFFFFFFFF000106FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "millenium_3",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00020701FFFFFFFFFF00FF0106FFFFFFFFFF00FFFF03000000000000000000000000000000000000",
    ),
    (
        "millenium_4",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00FFFFFFFFFFFFFFFF0007FFFFFFFFFFFFFF00020701FFFFFFFFFF0001FF06FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "millenium_5",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFF00020707FFFFFFFFFFFF000106FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "millenium_6",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFF000701FFFFFFFFFFFF00FF0706FFFFFFFFFF00FF0502FFFFFFFFFFFF00FF03000000000000000000000000000000000000",
    ),
    (
        "gold_excelsior",
        "FFFFFFFFFF00FFFF03FFFFFFFFFFFF000102FFFFFFFFFFFF0006FFFFFFFFFFFFFF0007FFFFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "aerokin",
        "FFFFFFFFFF000603FFFFFFFFFFFF0001FFFFFFFFFFFFFF000207FFFFFFFFFFFF0007FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "aerial_tower",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000102FFFFFFFFFFFF000607FFFFFFFFFFFF00FFFFFF03000000000000000000000000000000000000",
    ),
    (
        "fourth_edge_king",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF0001FFFFFFFFFFFFFF000702FFFFFFFFFFFF0007FFFFFFFFFFFFFF0006FFFF03000000000000000000000000000000000000",
    ),
];

/// 後手の囲い
pub(super) const WHITE_CASTLES: &[(&str, &str)] = &[
    (
        "left_mino_white",
        "13FFFF10FFFFFFFFFF121610FFFFFFFFFFFFFF111510FFFFFFFFFF17FF10FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_fortress_white",
        "13FF10FFFFFFFFFFFF121610FFFFFFFFFFFFFF171110FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "helmet_white",
        "13FFFF10FFFFFFFFFF12FF10FFFFFFFFFFFFFF171110FFFFFFFFFFFF1610FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "crab_white",
        "13FF10FFFFFFFFFFFF12FF10FFFFFFFFFFFFFF17FF10FFFFFFFFFF161110FFFFFFFFFFFFFF17FF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "bonanza_white",
        "13FF10FFFFFFFFFFFF12FF10FFFFFFFFFFFFFF161110FFFFFFFFFFFF1710FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "snowroof_white",
        "13FF10FFFFFFFFFFFF12FF10FFFFFFFFFFFFFF17FF10FFFFFFFFFF16FF1110FFFFFFFFFFFF171110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "silver_horns_snowroof_white",
        "13FF10FFFFFFFFFFFF12FF10FFFFFFFFFFFFFF17FF10FFFFFFFFFF16FF1110FFFFFFFFFFFF1710FFFFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "right_king_1_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF1110FFFFFFFFFFFF161210FFFFFFFFFF14FFFFFF10FFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "right_king_2_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFF171110FFFFFFFFFFFF161210FFFFFFFFFF14FFFFFF10FFFFFFFF13FFFFFF10FFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "right_king_3_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFFFF161110FFFFFFFFFFFFFF1210FFFFFFFFFF14FFFFFF10FFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "central_house_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFFFF1110FFFFFFFFFFFFFF1610FFFFFFFFFFFFFF1110FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "nakahara_white",
        "13FF10FFFFFFFFFFFF12FF10FFFFFFFFFFFF1117FF10FFFFFFFFFF16FF10FFFFFFFFFFFF17FF10FFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "duck_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF17FF10FFFFFFFFFFFFFF1110FFFFFFFFFFFFFF1610FFFFFFFFFFFFFF1110FFFFFFFFFFFF17FF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "paperweight_white",
        "FF13FF10FFFFFFFFFFFF1110FFFFFFFFFFFFFF161210FFFFFFFFFFFF1710FFFFFFFFFFFFFF17FF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "truck_white",
        "FFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF16FF10FFFFFFFFFFFF171110FFFFFFFFFFFF171110FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "boat_pawn_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFF1116FF10FFFFFFFFFF17FF10FFFFFFFFFFFFFF17FF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "daughter_inside_box_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFF1116FF10FFFFFFFFFF171710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "diamond_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFFFF16FF10FFFFFFFFFF171110FFFFFFFFFFFFFF171110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "strawberry_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFF1117FF10FFFFFFFFFFFF1610FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "yonenaga_white",
        "1316FF10FFFFFFFFFF12151110FFFFFFFFFFFF17FF10FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "elmo_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFF1716FF10FFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "elmo_gold_white",
        "13FFFF10FFFFFFFFFF121510FFFFFFFFFFFF1716FF10FFFFFFFFFFFF1110FFFFFFFFFFFF17FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "silver_elephant_eye_white",
        "FFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF1210FFFFFFFFFFFF111610FFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_elephant_eye_white",
        "FFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF1210FFFFFFFFFFFF171610FFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "kushikatsu_white",
        "131610FFFFFFFFFFFF121110FFFFFFFFFFFF1717FF10FFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "anaguma_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFF171710FFFFFFFFFFFF121110FFFFFFFFFFFF161310FFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "mino_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFF17FF10FFFFFFFFFFFFFF1110FFFFFFFFFFFF121610FFFFFFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "silver_crown_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFF171210FFFFFFFFFFFF161110FFFFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "wall_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFF171110FFFFFFFFFFFFFF1610FFFFFFFFFFFF12FF10FFFFFFFFFFFF13FF10FFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_mino_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF1110FFFFFFFFFFFFFF1710FFFFFFFFFFFF121610FFFFFFFFFFFF13FF10FFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "three_move_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFFFF1710FFFFFFFFFFFF111610FFFFFFFFFFFF12FF10FFFFFFFFFFFF13FF10FFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "rapid_castle_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF10FFFFFFFFFFFF111710FFFFFFFFFFFF121610FFFFFFFFFFFF13FF10FFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "flatfish_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF17FF10FFFFFFFFFFFF17FF10FFFFFFFFFFFFFF1110FFFFFFFFFFFF121610FFFFFFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_1_white",
        "13FF10FFFFFFFFFFFF16FF10FFFFFFFFFFFF11171210FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_2_white",
        "13FF10FFFFFFFFFFFF161110FFFFFFFFFFFF11171210FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_3_white",
        "13FFFF10FFFFFFFFFF1611FF10FFFFFFFFFF11171210FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_4_white",
        "13FF10FFFFFFFFFFFF16FF1110FFFFFFFFFF11171210FFFFFFFFFFFFFF1710FFFFFFFFFFFFFFFF10FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_5_white",
        "13FF10FFFFFFFFFFFF161110FFFFFFFFFFFF17171210FFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "millenium_6_white",
        "13FF10FFFFFFFFFFFF1215FF10FFFFFFFFFF1617FF10FFFFFFFFFFFF111710FFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "gold_excelsior_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFFFF1710FFFFFFFFFFFFFF1610FFFFFFFFFFFF121110FFFFFFFFFFFF13FFFF10FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "aerokin_white",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF1710FFFFFFFFFFFF171210FFFFFFFFFFFFFF1110FFFFFFFFFFFF131610FFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "aerial_tower_white",
        "13FFFFFF10FFFFFFFFFFFF171610FFFFFFFFFFFF121110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
    (
        "fourth_edge_king_white",
        "13FFFF1610FFFFFFFFFFFFFF1710FFFFFFFFFFFF121710FFFFFFFFFFFFFF1110FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000000000000000000",
    ),
];
