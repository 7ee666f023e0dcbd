//! Coarse continent outlines for the world backdrop.
//!
//! Hand-digitized `(lng, lat)` rings in degrees, deliberately low-detail:
//! enough to read the world at a glance behind markers, small enough to
//! embed as a const table. Rings are open (first point != last point).

pub(crate) static LANDMASSES: &[&[(f32, f32)]] = &[
    // North and Central America
    &[
        (-168.0, 65.5), (-161.0, 64.0), (-166.0, 60.0), (-153.0, 57.5),
        (-144.0, 60.0), (-133.0, 55.0), (-125.0, 48.5), (-124.0, 40.0),
        (-117.0, 32.5), (-110.0, 23.0), (-105.5, 19.5), (-96.5, 15.5),
        (-90.5, 13.5), (-85.5, 11.0), (-83.0, 8.5), (-79.5, 9.0),
        (-83.0, 10.5), (-87.0, 16.0), (-86.5, 21.5), (-90.0, 21.5),
        (-97.0, 26.0), (-91.0, 29.5), (-82.5, 27.0), (-80.0, 25.5),
        (-81.0, 32.0), (-75.5, 35.5), (-74.0, 40.5), (-70.0, 43.5),
        (-66.0, 44.5), (-60.0, 46.0), (-64.5, 49.5), (-58.0, 51.5),
        (-55.5, 52.0), (-60.0, 55.5), (-64.0, 60.0), (-70.0, 58.5),
        (-77.0, 62.5), (-82.0, 66.5), (-90.0, 69.0), (-105.0, 68.5),
        (-115.0, 69.5), (-128.0, 70.0), (-135.0, 69.5), (-141.0, 70.0),
        (-156.0, 71.0), (-161.0, 70.5), (-166.0, 68.5),
    ],
    // South America
    &[
        (-77.0, 8.5), (-75.0, 10.5), (-71.5, 12.5), (-64.0, 10.5),
        (-60.0, 8.5), (-52.5, 5.0), (-50.0, 0.0), (-44.0, -2.5),
        (-39.5, -3.0), (-35.0, -5.5), (-37.0, -11.0), (-39.0, -14.5),
        (-40.5, -20.5), (-48.0, -25.5), (-51.5, -30.5), (-53.5, -34.5),
        (-57.5, -38.0), (-62.0, -39.0), (-65.0, -45.0), (-67.5, -49.5),
        (-68.5, -52.5), (-71.0, -53.5), (-74.0, -50.5), (-73.5, -45.0),
        (-75.5, -41.5), (-73.5, -37.0), (-71.5, -32.0), (-70.5, -25.0),
        (-70.5, -18.5), (-75.5, -14.5), (-81.0, -6.0), (-80.5, -2.0),
        (-77.5, 3.5),
    ],
    // Africa
    &[
        (-6.0, 35.0), (-10.0, 31.5), (-16.0, 24.5), (-16.5, 16.0),
        (-17.5, 14.5), (-15.0, 11.0), (-8.5, 5.0), (-4.0, 5.5),
        (2.5, 6.5), (8.5, 4.5), (9.0, -2.0), (13.5, -12.0),
        (11.5, -18.0), (14.5, -26.0), (18.5, -34.5), (25.0, -34.0),
        (32.5, -28.5), (35.5, -23.5), (40.5, -15.5), (39.5, -7.0),
        (41.5, -1.5), (44.0, 1.0), (51.5, 10.5), (47.5, 11.5),
        (43.0, 11.5), (37.5, 18.0), (37.0, 22.0), (34.5, 27.5),
        (32.5, 30.0), (29.0, 31.0), (25.0, 31.5), (15.5, 32.5),
        (10.5, 37.0), (1.5, 36.5),
    ],
    // Eurasia
    &[
        (-9.5, 37.0), (-9.0, 43.5), (-2.0, 43.5), (-4.5, 48.5),
        (0.0, 49.5), (3.0, 51.5), (8.0, 54.0), (8.5, 57.0),
        (5.5, 58.5), (5.0, 62.0), (12.0, 65.0), (17.0, 69.0),
        (25.0, 71.0), (30.0, 70.0), (40.0, 67.5), (44.0, 66.5),
        (55.0, 68.5), (68.0, 69.0), (80.0, 72.5), (95.0, 76.0),
        (105.0, 77.5), (113.0, 74.0), (130.0, 72.0), (140.0, 72.5),
        (160.0, 70.0), (178.0, 65.0), (170.0, 60.0), (162.0, 58.0),
        (158.0, 52.0), (151.0, 59.0), (141.0, 54.0), (135.0, 43.5),
        (130.5, 42.5), (127.5, 39.5), (126.0, 35.0), (121.0, 39.0),
        (122.0, 30.0), (117.0, 23.5), (108.5, 21.5), (105.5, 19.0),
        (109.0, 12.5), (104.5, 8.5), (100.5, 13.5), (98.5, 8.0),
        (103.5, 1.5), (100.0, 6.0), (98.0, 16.0), (94.0, 16.0),
        (91.5, 22.5), (87.0, 21.0), (80.5, 15.5), (80.0, 8.5),
        (76.0, 8.5), (72.5, 19.5), (66.5, 25.0), (61.5, 25.0),
        (57.0, 26.5), (59.5, 22.5), (55.0, 17.0), (52.0, 15.5),
        (43.5, 12.5), (39.0, 21.5), (34.5, 28.0), (32.5, 29.5),
        (34.0, 31.5), (35.5, 36.0), (30.5, 36.5), (27.0, 37.0),
        (26.0, 40.0), (29.0, 41.0), (33.5, 42.0), (28.0, 41.5),
        (24.0, 40.5), (22.5, 36.5), (19.5, 40.0), (13.5, 45.5),
        (18.5, 40.0), (15.5, 38.0), (12.0, 41.5), (8.5, 44.0),
        (6.0, 43.0), (3.0, 42.0), (-0.5, 39.5), (-2.5, 36.5),
        (-5.5, 36.0),
    ],
    // Australia
    &[
        (113.5, -22.0), (114.0, -26.0), (115.5, -33.5), (119.0, -35.0),
        (124.0, -33.0), (129.5, -31.5), (134.0, -32.5), (137.5, -35.0),
        (139.5, -37.0), (144.0, -38.5), (147.5, -38.5), (150.0, -37.0),
        (153.0, -32.5), (153.5, -28.5), (152.5, -25.0), (150.5, -22.5),
        (146.5, -19.0), (145.5, -16.5), (142.5, -10.5), (141.5, -14.5),
        (139.5, -17.5), (136.5, -15.5), (135.5, -12.0), (132.0, -11.0),
        (129.5, -14.5), (126.0, -14.0), (122.5, -17.0), (119.0, -20.0),
    ],
    // Greenland
    &[
        (-45.0, 60.0), (-53.0, 65.5), (-54.0, 70.5), (-56.0, 74.5),
        (-61.5, 76.5), (-68.0, 78.5), (-58.0, 82.0), (-42.0, 83.5),
        (-30.0, 83.0), (-22.0, 80.5), (-20.0, 76.0), (-22.0, 70.5),
        (-25.0, 68.5), (-33.0, 66.5), (-41.0, 62.5),
    ],
    // Antarctica (closed along the bottom edge of the projection)
    &[
        (-180.0, -77.0), (-158.0, -76.0), (-130.0, -74.5), (-100.0, -73.0),
        (-75.0, -72.0), (-62.0, -65.5), (-58.0, -63.5), (-45.0, -72.0),
        (-40.0, -77.0), (-10.0, -70.5), (20.0, -69.5), (60.0, -67.0),
        (100.0, -66.0), (140.0, -66.5), (170.0, -71.5), (180.0, -72.0),
        (180.0, -89.0), (-180.0, -89.0),
    ],
    // Britain
    &[
        (-5.5, 50.1), (-4.5, 53.4), (-5.0, 56.0), (-5.5, 58.5),
        (-3.0, 58.6), (-1.8, 57.5), (0.2, 53.0), (1.7, 52.5),
        (0.5, 50.8),
    ],
    // Ireland
    &[
        (-10.0, 52.0), (-10.0, 54.2), (-8.0, 55.2), (-6.0, 54.0),
        (-6.2, 52.2), (-8.5, 51.5),
    ],
    // Iceland
    &[
        (-24.5, 65.5), (-22.0, 66.3), (-16.0, 66.5), (-13.5, 65.0),
        (-18.0, 63.4), (-22.5, 63.8),
    ],
    // Japan
    &[
        (130.5, 31.0), (131.5, 33.5), (135.5, 33.5), (137.0, 34.7),
        (140.0, 35.0), (141.0, 38.5), (141.5, 41.5), (140.0, 41.5),
        (138.5, 38.0), (136.5, 36.0), (132.5, 35.5), (129.5, 33.5),
    ],
    // Madagascar
    &[
        (44.0, -25.0), (43.5, -20.0), (44.5, -16.0), (46.5, -13.8),
        (49.5, -12.5), (50.5, -15.5), (49.5, -19.0), (47.5, -24.0),
        (45.5, -25.5),
    ],
    // Sumatra
    &[
        (95.5, 5.5), (97.5, 3.5), (100.5, 0.5), (103.0, -2.0),
        (106.0, -5.5), (104.5, -5.7), (101.5, -3.0), (98.5, 0.5),
        (95.0, 4.5),
    ],
    // Borneo
    &[
        (109.0, 1.5), (109.5, -1.5), (113.0, -3.5), (116.5, -3.5),
        (117.5, 0.0), (119.0, 1.0), (117.5, 4.5), (115.0, 5.5),
        (110.5, 3.0),
    ],
    // New Guinea
    &[
        (131.0, -1.5), (134.5, -2.5), (138.0, -2.0), (141.0, -2.8),
        (145.5, -5.0), (148.0, -8.0), (147.0, -10.0), (143.5, -8.5),
        (138.5, -8.0), (135.0, -4.5), (132.0, -4.0),
    ],
    // New Zealand, North Island
    &[
        (172.8, -34.5), (174.5, -36.0), (176.0, -37.5), (178.5, -37.7),
        (177.0, -39.5), (175.0, -41.5), (173.0, -39.0),
    ],
    // New Zealand, South Island
    &[
        (172.5, -40.5), (174.0, -41.5), (173.0, -43.5), (171.0, -44.5),
        (168.0, -46.5), (166.5, -45.5), (170.0, -42.5),
    ],
];
