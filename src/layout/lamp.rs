//! Geometry preset for the 392 pixel wall lamp
//!
//! Coordinates are in millimetres from the lamp's top-left corner, listed in
//! strip wiring order. The strip is made of 25 straight edges that meet at 12
//! vertices.

use super::{Edge, EdgeEnd, EdgeSide, Layout, Point, Vertex};

/// Number of pixels on the lamp
pub const LAMP_PIXEL_COUNT: usize = 392;

/// Width of the lamp
pub const LAMP_WIDTH: u16 = 1780;

/// Height of the lamp
pub const LAMP_HEIGHT: u16 = 740;

const fn p(x: u16, y: u16) -> Point {
    Point::new(x, y)
}

#[rustfmt::skip]
pub static LAMP_PIXELS: [Point; LAMP_PIXEL_COUNT] = [
    // edge 0
    p(0, 730), p(0, 698), p(0, 662), p(0, 628), p(0, 596), p(0, 562), p(0, 528), p(0, 492),
    p(0, 460), p(0, 426), p(0, 392), p(0, 358), p(0, 324), p(0, 290), p(0, 258), p(0, 222),
    p(0, 190), p(0, 156), p(0, 122), p(0, 88), p(0, 54), p(0, 20),
    // edge 1
    p(11, 17), p(30, 41), p(51, 68), p(73, 95), p(94, 121), p(115, 148), p(136, 175),
    p(157, 201), p(178, 228), p(199, 255), p(219, 281), p(240, 308), p(260, 334), p(283, 363),
    // edge 2
    p(270, 390), p(250, 417), p(231, 422), p(208, 471), p(188, 497), p(167, 524), p(146, 551),
    p(125, 578), p(104, 605), p(83, 632), p(62, 659), p(41, 686), p(20, 713),
    // edge 3
    p(26, 740), p(60, 740), p(94, 740), p(128, 740), p(163, 740), p(197, 740), p(231, 740),
    p(264, 740), p(299, 740), p(333, 740), p(366, 740), p(400, 740), p(433, 740),
    // edge 4
    p(441, 709), p(427, 678), p(413, 648), p(399, 617), p(386, 587), p(372, 557), p(358, 526),
    p(345, 496), p(330, 464), p(317, 435), p(302, 404),
    // edge 5
    p(310, 379), p(340, 392), p(371, 405), p(402, 418), p(432, 431), p(464, 445), p(494, 457),
    p(524, 470), p(555, 483), p(586, 496), p(617, 509), p(648, 523), p(679, 535), p(708, 548),
    p(740, 561), p(771, 574), p(801, 586), p(832, 599), p(836, 611),
    // edge 6
    p(873, 631), p(840, 640), p(808, 649), p(777, 658), p(743, 667), p(711, 676), p(679, 685),
    p(647, 694), p(614, 703), p(582, 712), p(549, 720), p(518, 729),
    // edge 7
    p(474, 740), p(512, 740), p(541, 740), p(574, 740), p(609, 740), p(642, 740), p(675, 740),
    p(708, 740), p(742, 740), p(775, 740), p(808, 740), p(842, 740), p(876, 740), p(909, 740),
    p(942, 740), p(975, 740), p(1007, 740), p(1041, 740), p(1075, 740), p(1108, 740),
    p(1141, 740), p(1175, 740), p(1209, 740), p(1242, 740), p(1275, 740),
    // edge 8
    p(1279, 728), p(1247, 718), p(1214, 708), p(1182, 700), p(1150, 690), p(1118, 682),
    p(1085, 673), p(1053, 664), p(1021, 655), p(991, 647), p(958, 638), p(926, 629),
    // edge 9
    p(926, 614), p(958, 605), p(990, 597), p(1023, 588), p(1055, 580), p(1088, 572),
    p(1121, 564), p(1153, 556), p(1186, 547), p(1218, 539), p(1250, 530), p(1282, 522),
    p(1315, 513), p(1347, 505), p(1380, 496), p(1412, 488), p(1443, 480), p(1475, 471),
    p(1508, 462), p(1540, 453), p(1573, 445), p(1605, 436), p(1637, 427),
    // edge 10
    p(1632, 445), p(1609, 479), p(1585, 504), p(1561, 528), p(1538, 552), p(1515, 576),
    p(1491, 601), p(1468, 624), p(1444, 649), p(1422, 673), p(1398, 696), p(1374, 723),
    // edge 11
    p(1326, 740), p(1360, 740), p(1394, 740), p(1428, 740), p(1462, 740), p(1496, 740),
    p(1530, 740), p(1564, 740), p(1598, 740), p(1632, 740), p(1664, 740), p(1698, 740),
    p(1731, 740), p(1765, 740),
    // edge 12
    p(1764, 701), p(1754, 667), p(1743, 635), p(1733, 603), p(1722, 570), p(1711, 539),
    p(1700, 506), p(1689, 475), p(1677, 441),
    // edge 13
    p(1670, 405), p(1679, 374), p(1688, 343), p(1697, 311), p(1706, 278), p(1716, 245),
    p(1725, 214), p(1735, 181), p(1744, 149), p(1753, 116), p(1762, 84), p(1772, 53),
    // edge 14
    p(1780, 19), p(1780, 53), p(1780, 88), p(1780, 121), p(1780, 155), p(1780, 188),
    p(1780, 221), p(1780, 255), p(1780, 289), p(1780, 322), p(1780, 355), p(1780, 390),
    p(1780, 424), p(1780, 458), p(1780, 492), p(1780, 527), p(1780, 559), p(1780, 593),
    p(1780, 628), p(1780, 662), p(1780, 695), p(1780, 727),
    // edge 15
    p(1761, 0), p(1727, 0), p(1694, 0), p(1661, 0), p(1627, 0), p(1594, 0), p(1561, 0),
    p(1527, 0), p(1494, 0), p(1461, 0), p(1428, 0),
    // edge 16
    p(1430, 25), p(1446, 53), p(1463, 82), p(1479, 110), p(1496, 138), p(1513, 168),
    p(1530, 196), p(1547, 225), p(1565, 254), p(1581, 282), p(1599, 312), p(1616, 341),
    p(1634, 370), p(1650, 397),
    // edge 17
    p(1620, 409), p(1587, 401), p(1555, 393), p(1523, 385), p(1491, 377), p(1458, 369),
    p(1426, 361), p(1394, 353), p(1361, 344), p(1330, 336), p(1297, 328), p(1265, 320),
    p(1234, 312), p(1202, 304), p(1169, 296), p(1137, 288), p(1104, 279), p(1073, 271),
    // edge 18
    p(1063, 253), p(1088, 234), p(1115, 215), p(1143, 195), p(1170, 176), p(1196, 157),
    p(1225, 137), p(1252, 117), p(1279, 97), p(1306, 78), p(1333, 58), p(1360, 38), p(1388, 17),
    // edge 19
    p(1389, 0), p(1356, 0), p(1322, 0), p(1289, 0), p(1256, 0), p(1223, 0), p(1189, 0),
    p(1154, 0), p(1121, 0), p(1087, 0), p(1054, 0), p(1022, 0), p(987, 0), p(954, 0), p(921, 0),
    p(888, 0), p(855, 0), p(822, 0), p(787, 0), p(755, 0), p(722, 0), p(689, 0), p(653, 0),
    p(620, 0), p(586, 0), p(553, 0), p(515, 0),
    // edge 20
    p(526, 19), p(555, 33), p(587, 49), p(617, 63), p(647, 77), p(678, 92), p(708, 106),
    p(738, 120), p(768, 135), p(798, 150), p(828, 164), p(858, 179), p(888, 193), p(918, 207),
    p(947, 222), p(978, 236), p(1009, 250),
    // edge 21
    p(1036, 298), p(1023, 328), p(1010, 360), p(996, 391), p(982, 420), p(968, 452),
    p(954, 481), p(941, 511), p(927, 542), p(913, 572), p(900, 603),
    // edge 22
    p(1017, 277), p(984, 280), p(952, 284), p(919, 288), p(886, 292), p(853, 297), p(819, 302),
    p(786, 305), p(752, 310), p(719, 314), p(686, 319), p(654, 323), p(619, 328), p(586, 332),
    p(552, 336), p(520, 341), p(485, 345), p(452, 349), p(419, 354), p(385, 359), p(354, 363),
    p(318, 367),
    // edge 23
    p(301, 338), p(316, 306), p(330, 276), p(334, 246), p(359, 215), p(373, 185), p(387, 154),
    p(401, 124), p(416, 94), p(430, 63), p(444, 32),
    // edge 24
    p(482, 0), p(449, 0), p(416, 0), p(383, 0), p(349, 0), p(316, 0), p(283, 0), p(248, 0),
    p(215, 0), p(181, 0), p(146, 0), p(112, 0), p(78, 0), p(42, 0), p(6, 0),
];

pub static LAMP_EDGES: [Edge; 25] = [
    Edge::new(0, 21),
    Edge::new(22, 35),
    Edge::new(36, 48),
    Edge::new(49, 61),
    Edge::new(62, 72),
    Edge::new(73, 91),
    Edge::new(92, 103),
    Edge::new(104, 128),
    Edge::new(129, 140),
    Edge::new(141, 163),
    Edge::new(164, 175),
    Edge::new(176, 189),
    Edge::new(190, 198),
    Edge::new(199, 210),
    Edge::new(211, 232),
    Edge::new(233, 243),
    Edge::new(244, 257),
    Edge::new(258, 275),
    Edge::new(276, 288),
    Edge::new(289, 315),
    Edge::new(316, 332),
    Edge::new(333, 343),
    Edge::new(344, 365),
    Edge::new(366, 376),
    Edge::new(377, 391),
];

const fn start(edge: u8) -> EdgeEnd {
    EdgeEnd::new(edge, EdgeSide::Start)
}

const fn end(edge: u8) -> EdgeEnd {
    EdgeEnd::new(edge, EdgeSide::End)
}

const V0: &[EdgeEnd] = &[end(0), start(1), end(24)];
const V1: &[EdgeEnd] = &[end(19), start(20), end(23), start(24)];
const V2: &[EdgeEnd] = &[end(15), start(16), end(18), start(19)];
const V3: &[EdgeEnd] = &[end(13), start(14), start(15)];
const V4: &[EdgeEnd] = &[end(1), start(2), end(4), start(5), end(22), start(23)];
const V5: &[EdgeEnd] = &[end(17), start(18), end(20), start(21), start(22)];
const V6: &[EdgeEnd] = &[end(9), start(10), end(12), start(13), end(16), start(17)];
const V7: &[EdgeEnd] = &[end(5), start(6), end(8), start(9), end(21)];
const V8: &[EdgeEnd] = &[start(0), end(2), start(3)];
const V9: &[EdgeEnd] = &[end(3), start(4), end(6), start(7)];
const V10: &[EdgeEnd] = &[end(7), start(8), end(10), start(11)];
const V11: &[EdgeEnd] = &[end(11), start(12), end(14)];

pub static LAMP_VERTICES: [Vertex<'static>; 12] = [
    Vertex::new(V0),
    Vertex::new(V1),
    Vertex::new(V2),
    Vertex::new(V3),
    Vertex::new(V4),
    Vertex::new(V5),
    Vertex::new(V6),
    Vertex::new(V7),
    Vertex::new(V8),
    Vertex::new(V9),
    Vertex::new(V10),
    Vertex::new(V11),
];

/// Layout of the wall lamp, including its edge graph
pub fn lamp() -> Layout<'static> {
    Layout::with_extent(&LAMP_PIXELS, LAMP_WIDTH, LAMP_HEIGHT)
        .with_graph(&LAMP_EDGES, &LAMP_VERTICES)
}
